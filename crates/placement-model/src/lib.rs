pub mod config;
pub mod dataset;
pub mod results;

pub use config::{
    DEFAULT_ALMOST_READY_THRESHOLD, DEFAULT_PROFICIENCY_THRESHOLD, DEFAULT_READY_THRESHOLD,
    RoleRequirement, RoleTable, Thresholds,
};
pub use dataset::{CellValue, Column, ColumnType, Dataset, SkillAverages};
pub use results::{
    EvaluationReport, FeedbackPlan, PlanDay, ReadinessResult, ReadinessStatus, RejectedRole,
    RoleRecommendation,
};
