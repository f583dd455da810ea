//! Rule-based evaluators for placement readiness.

pub mod averages;
pub mod feedback;
pub mod next_action;
pub mod pipeline;
pub mod readiness;
pub mod roles;

pub use averages::skill_averages;
pub use feedback::{PREPARATION_PLAN, analyze};
pub use next_action::summarize;
pub use pipeline::{EvaluationOptions, run_evaluation};
pub use readiness::evaluate;
pub use roles::RoleMapper;
