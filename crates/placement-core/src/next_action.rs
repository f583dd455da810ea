//! Next-action synthesis from the readiness verdict and gap list.

use placement_model::ReadinessStatus;

const READY_ACTION: &str = "Start applying for roles and continue mock interview practice";
const NOT_READY_ACTION: &str = "Build fundamentals before attempting placements";

// Explicit fallback for the AlmostReady-with-no-gaps case; the naive
// formatting would otherwise emit an empty skill list.
const ALMOST_READY_NO_GAPS_ACTION: &str =
    "Reattempt the assessment to confirm consistent performance";

/// Derive the single next-action recommendation.
///
/// `Ready` and `NotReady` map to fixed messages regardless of gaps;
/// `AlmostReady` names the gap skills, comma-joined, when any exist.
pub fn summarize(status: ReadinessStatus, gaps: &[String]) -> String {
    match status {
        ReadinessStatus::Ready => READY_ACTION.to_string(),
        ReadinessStatus::AlmostReady => {
            if gaps.is_empty() {
                ALMOST_READY_NO_GAPS_ACTION.to_string()
            } else {
                format!(
                    "Focus on improving {} and reattempt assessment",
                    gaps.join(", ")
                )
            }
        }
        ReadinessStatus::NotReady => NOT_READY_ACTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_ignores_gaps() {
        let gaps = vec!["python".to_string()];
        assert_eq!(
            summarize(ReadinessStatus::Ready, &gaps),
            "Start applying for roles and continue mock interview practice"
        );
    }

    #[test]
    fn almost_ready_names_gaps() {
        let gaps = vec!["python".to_string(), "dsa".to_string()];
        assert_eq!(
            summarize(ReadinessStatus::AlmostReady, &gaps),
            "Focus on improving python, dsa and reattempt assessment"
        );
    }

    #[test]
    fn almost_ready_without_gaps_falls_back() {
        assert_eq!(
            summarize(ReadinessStatus::AlmostReady, &[]),
            "Reattempt the assessment to confirm consistent performance"
        );
    }

    #[test]
    fn not_ready_is_fixed() {
        assert_eq!(
            summarize(ReadinessStatus::NotReady, &[]),
            "Build fundamentals before attempting placements"
        );
    }
}
