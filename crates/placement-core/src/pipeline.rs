//! Candidate evaluation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Interpret**: extract skill columns from the dataset
//! 2. **Readiness**: overall verdict from per-skill averages
//! 3. **Roles**: match averages against the role table
//! 4. **Feedback**: strength/gap split plus the preparation plan
//! 5. **Next action**: single recommendation string
//!
//! Each stage reads the shared dataset and skill set; none of them call each
//! other. Any failure aborts the remaining stages with no partial report.

use tracing::{debug, info, info_span};

use placement_ingest::{Result, extract_skills};
use placement_model::{Dataset, EvaluationReport, RoleTable, Thresholds};

use crate::averages::skill_averages;
use crate::feedback;
use crate::next_action;
use crate::readiness;
use crate::roles::RoleMapper;

/// Configuration for one evaluation pass.
#[derive(Debug, Clone, Default)]
pub struct EvaluationOptions {
    pub thresholds: Thresholds,
    pub role_table: RoleTable,
}

/// Run the full evaluation pipeline over a loaded dataset.
///
/// Pure apart from tracing: the same dataset and options always produce the
/// same report.
pub fn run_evaluation(dataset: &Dataset, options: &EvaluationOptions) -> Result<EvaluationReport> {
    let span = info_span!("evaluation", rows = dataset.row_count());
    let _guard = span.enter();

    let skills = {
        let _stage = info_span!("interpret").entered();
        extract_skills(dataset)?
    };
    let averages = skill_averages(dataset, &skills);
    debug!(skills = skills.len(), "skill averages computed");

    let readiness = {
        let _stage = info_span!("readiness").entered();
        readiness::evaluate(&averages, &options.thresholds)
    };
    info!(status = %readiness.status, score = readiness.average_score, "readiness evaluated");

    let roles = {
        let _stage = info_span!("roles").entered();
        RoleMapper::new(options.role_table.clone()).map(&averages, &options.thresholds)
    };

    let feedback = {
        let _stage = info_span!("feedback").entered();
        feedback::analyze(&averages, &options.thresholds)
    };

    let next_action = {
        let _stage = info_span!("next_action").entered();
        next_action::summarize(readiness.status, &feedback.gaps)
    };

    Ok(EvaluationReport {
        skills,
        averages,
        readiness,
        roles,
        feedback,
        next_action,
    })
}
