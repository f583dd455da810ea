//! Overall readiness verdict.

use placement_model::{ReadinessResult, ReadinessStatus, SkillAverages, Thresholds};

const READY_REASONING: &str = "Consistently strong performance across assessed skills";
const ALMOST_READY_REASONING: &str = "Basic understanding present but lacks consistency";
const NOT_READY_REASONING: &str = "Below expected performance in core skills";

const GENERIC_SUGGESTIONS: [&str; 2] = [
    "Practice mock interview questions regularly",
    "Revise fundamentals and core concepts",
];

const SUGGESTION_TARGET: usize = 3;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Evaluate the overall readiness verdict from per-skill averages.
///
/// The overall score is the mean of the per-skill means, not a row-weighted
/// grand mean: skills with different numbers of valid rows still contribute
/// equally. Threshold comparison uses the unrounded score; only the reported
/// `average_score` is rounded to two decimals.
pub fn evaluate(averages: &SkillAverages, thresholds: &Thresholds) -> ReadinessResult {
    let average_score = if averages.is_empty() {
        0.0
    } else {
        averages.iter().map(|(_, mean)| mean).sum::<f64>() / averages.len() as f64
    };

    let (status, reasoning) = if average_score >= thresholds.ready {
        (ReadinessStatus::Ready, READY_REASONING)
    } else if average_score >= thresholds.almost_ready {
        (ReadinessStatus::AlmostReady, ALMOST_READY_REASONING)
    } else {
        (ReadinessStatus::NotReady, NOT_READY_REASONING)
    };

    ReadinessResult {
        status,
        average_score: round2(average_score),
        reasoning: reasoning.to_string(),
        suggestions: build_suggestions(averages),
    }
}

/// Suggest improvements, weakest skills first.
///
/// The two lowest-averaging skills get a targeted suggestion (stable sort,
/// ties keep skill-set order), then generic suggestions pad the list up to
/// three entries.
fn build_suggestions(averages: &SkillAverages) -> Vec<String> {
    let mut ranked: Vec<(&str, f64)> = averages.iter().collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut suggestions: Vec<String> = ranked
        .iter()
        .take(2)
        .map(|(skill, _)| format!("Improve proficiency in {skill}"))
        .collect();

    for generic in GENERIC_SUGGESTIONS {
        if suggestions.len() < SUGGESTION_TARGET {
            suggestions.push(generic.to_string());
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages(entries: &[(&str, f64)]) -> SkillAverages {
        let mut averages = SkillAverages::default();
        for (skill, mean) in entries {
            averages.push(*skill, *mean);
        }
        averages
    }

    #[test]
    fn boundary_exactly_ready() {
        let result = evaluate(&averages(&[("sql", 75.0)]), &Thresholds::default());
        assert_eq!(result.status, ReadinessStatus::Ready);
        assert_eq!(result.reasoning, READY_REASONING);
    }

    #[test]
    fn boundary_exactly_almost_ready() {
        let result = evaluate(&averages(&[("sql", 60.0)]), &Thresholds::default());
        assert_eq!(result.status, ReadinessStatus::AlmostReady);
        assert_eq!(result.reasoning, ALMOST_READY_REASONING);
    }

    #[test]
    fn status_compares_before_rounding() {
        // 59.999 rounds to 60.0 for display but must stay NotReady.
        let result = evaluate(&averages(&[("sql", 59.999)]), &Thresholds::default());
        assert_eq!(result.status, ReadinessStatus::NotReady);
        assert_eq!(result.average_score, 60.0);
    }

    #[test]
    fn score_is_mean_of_means() {
        let result = evaluate(
            &averages(&[("sql", 82.5), ("python", 52.5)]),
            &Thresholds::default(),
        );
        assert_eq!(result.average_score, 67.5);
        assert_eq!(result.status, ReadinessStatus::AlmostReady);
    }

    #[test]
    fn suggestions_start_with_weakest_skills() {
        let result = evaluate(
            &averages(&[("sql", 82.5), ("python", 52.5)]),
            &Thresholds::default(),
        );
        assert_eq!(
            result.suggestions,
            vec![
                "Improve proficiency in python",
                "Improve proficiency in sql",
                "Practice mock interview questions regularly",
            ]
        );
    }

    #[test]
    fn single_skill_gets_both_generic_suggestions() {
        let result = evaluate(&averages(&[("sql", 40.0)]), &Thresholds::default());
        assert_eq!(
            result.suggestions,
            vec![
                "Improve proficiency in sql",
                "Practice mock interview questions regularly",
                "Revise fundamentals and core concepts",
            ]
        );
    }

    #[test]
    fn tied_averages_keep_skill_set_order() {
        let result = evaluate(
            &averages(&[("sql", 50.0), ("python", 50.0), ("dsa", 90.0)]),
            &Thresholds::default(),
        );
        assert_eq!(result.suggestions[0], "Improve proficiency in sql");
        assert_eq!(result.suggestions[1], "Improve proficiency in python");
    }
}
