//! Skill column extraction.

use tracing::debug;

use placement_model::Dataset;

use crate::error::{IngestError, Result};

/// Select the columns whose values are candidate skill scores.
///
/// Returns the names of integer and float columns in dataset column order.
/// Column names double as skill identifiers for role matching, matched
/// case-sensitively.
pub fn extract_skills(dataset: &Dataset) -> Result<Vec<String>> {
    let skills: Vec<String> = dataset
        .columns()
        .iter()
        .filter(|column| column.dtype.is_numeric())
        .map(|column| column.name.clone())
        .collect();

    if skills.is_empty() {
        return Err(IngestError::NoNumericColumns);
    }

    debug!(skills = skills.len(), "skill columns identified");
    Ok(skills)
}
