//! Per-skill column averages.

use placement_model::{Dataset, SkillAverages};

/// Compute the mean score of each skill column.
///
/// Averages are computed fresh for every evaluation pass and keep skill-set
/// order. A skill whose column is absent or carries no numeric value is
/// skipped, so the result's keys are always a subset of the skill set.
pub fn skill_averages(dataset: &Dataset, skills: &[String]) -> SkillAverages {
    let mut averages = SkillAverages::default();
    for skill in skills {
        if let Some(mean) = dataset.column(skill).and_then(|column| column.mean()) {
            averages.push(skill.clone(), mean);
        }
    }
    averages
}
