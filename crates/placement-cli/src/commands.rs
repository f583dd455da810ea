//! Command implementations.

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::info;

use placement_core::{EvaluationOptions, run_evaluation};
use placement_ingest::load_dataset;
use placement_model::{RoleTable, Thresholds};
use placement_report::render_markdown;

use crate::cli::EvaluateArgs;
use crate::summary::{apply_table_style, print_summary};

pub fn run_evaluate(args: &EvaluateArgs) -> Result<()> {
    let dataset = load_dataset(&args.csv)
        .with_context(|| format!("load {}", args.csv.display()))?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "dataset loaded"
    );

    let options = EvaluationOptions {
        thresholds: Thresholds {
            ready: args.ready_threshold,
            almost_ready: args.almost_ready_threshold,
            proficiency: args.proficiency_threshold,
        },
        role_table: RoleTable::builtin(),
    };
    let report = run_evaluation(&dataset, &options).context("evaluate candidate data")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        print_summary(&report);
    }

    if let Some(path) = &args.report {
        let markdown = render_markdown(&report, Utc::now().date_naive());
        std::fs::write(path, markdown)
            .with_context(|| format!("write report to {}", path.display()))?;
        println!("Report written to {}.", path.display());
    }

    Ok(())
}

pub fn run_roles() -> Result<()> {
    let table_config = RoleTable::builtin();
    let mut table = Table::new();
    table.set_header(vec!["Role", "Required Skills"]);
    apply_table_style(&mut table);
    for requirement in table_config.iter() {
        table.add_row(vec![
            requirement.role.clone(),
            requirement.skills.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}
