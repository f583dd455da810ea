//! Strength/gap analysis and the fixed preparation schedule.

use placement_model::{FeedbackPlan, PlanDay, SkillAverages, Thresholds};

/// The constant 7-day preparation schedule, identical for every candidate.
pub const PREPARATION_PLAN: [(&str, &str); 7] = [
    ("Day 1", "Revise fundamentals"),
    ("Day 2", "Practice basic problems"),
    ("Day 3", "Learn intermediate concepts"),
    ("Day 4", "Practice intermediate problems"),
    ("Day 5", "Advanced queries and scenarios"),
    ("Day 6", "Mock interview practice"),
    ("Day 7", "Final revision and confidence building"),
];

/// Split skills into strengths and gaps and attach the preparation plan.
///
/// The partition is exhaustive and disjoint over the averaged skills: a skill
/// at or above the proficiency threshold is a strength, below it a gap.
/// Skill-set order is preserved within each group.
pub fn analyze(averages: &SkillAverages, thresholds: &Thresholds) -> FeedbackPlan {
    let mut strengths = Vec::new();
    let mut gaps = Vec::new();
    for (skill, average) in averages.iter() {
        if average >= thresholds.proficiency {
            strengths.push(skill.to_string());
        } else {
            gaps.push(skill.to_string());
        }
    }

    FeedbackPlan {
        strengths,
        gaps,
        plan: PREPARATION_PLAN
            .iter()
            .map(|(day, task)| PlanDay {
                day: (*day).to_string(),
                task: (*task).to_string(),
            })
            .collect(),
    }
}
