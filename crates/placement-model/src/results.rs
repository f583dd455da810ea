use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::SkillAverages;

/// Tiered verdict on overall candidate preparedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessStatus {
    Ready,
    AlmostReady,
    NotReady,
}

impl ReadinessStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReadinessStatus::Ready => "Ready",
            ReadinessStatus::AlmostReady => "Almost Ready",
            ReadinessStatus::NotReady => "Not Ready",
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall readiness verdict with reasoning and improvement suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessResult {
    pub status: ReadinessStatus,
    /// Mean of the per-skill means, rounded to two decimals.
    pub average_score: f64,
    pub reasoning: String,
    /// Two or three suggestions, weakest skills first.
    pub suggestions: Vec<String>,
}

/// A role the candidate does not currently qualify for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRole {
    pub role: String,
    /// Required skills that are absent or below the proficiency threshold,
    /// in the role's declared skill order.
    pub missing: Vec<String>,
}

/// Partition of the role table into recommended and rejected roles.
///
/// Both collections preserve the role table's declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub recommended: Vec<String>,
    pub rejected: Vec<RejectedRole>,
}

/// One entry of the fixed preparation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub task: String,
}

/// Strength/gap split plus the fixed 7-day preparation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPlan {
    /// Skills at or above the proficiency threshold, skill-set order.
    pub strengths: Vec<String>,
    /// Skills below the proficiency threshold, skill-set order.
    pub gaps: Vec<String>,
    /// Constant day-by-day schedule, independent of the input data.
    pub plan: Vec<PlanDay>,
}

/// Everything one evaluation pass produces for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub skills: Vec<String>,
    pub averages: SkillAverages,
    pub readiness: ReadinessResult,
    pub roles: RoleRecommendation,
    pub feedback: FeedbackPlan,
    pub next_action: String,
}
