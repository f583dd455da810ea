//! Console summary rendering for evaluation results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use placement_model::{EvaluationReport, ReadinessStatus};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn status_cell(status: ReadinessStatus) -> Cell {
    let color = match status {
        ReadinessStatus::Ready => Color::Green,
        ReadinessStatus::AlmostReady => Color::Yellow,
        ReadinessStatus::NotReady => Color::Red,
    };
    Cell::new(status.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

pub fn print_summary(report: &EvaluationReport) {
    print_readiness(report);
    print_suggestions(report);
    print_roles(report);
    print_skills(report);
    print_plan(report);
    println!("Next action: {}", report.next_action);
}

fn print_readiness(report: &EvaluationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Readiness Status"),
        header_cell("Average Score"),
        header_cell("Skills Evaluated"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        status_cell(report.readiness.status),
        Cell::new(report.readiness.average_score).set_alignment(CellAlignment::Right),
        Cell::new(report.skills.len()).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
    println!("Reasoning: {}", report.readiness.reasoning);
}

fn print_suggestions(report: &EvaluationReport) {
    println!("Suggestions:");
    for suggestion in &report.readiness.suggestions {
        println!("- {suggestion}");
    }
}

fn print_roles(report: &EvaluationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Verdict"),
        header_cell("Missing Skills"),
    ]);
    apply_table_style(&mut table);
    for role in &report.roles.recommended {
        table.add_row(vec![
            Cell::new(role),
            Cell::new("Recommended").fg(Color::Green),
            Cell::new("-"),
        ]);
    }
    for rejected in &report.roles.rejected {
        table.add_row(vec![
            Cell::new(&rejected.role),
            Cell::new("Not recommended").fg(Color::Red),
            Cell::new(rejected.missing.join(", ")),
        ]);
    }
    println!("{table}");
    if report.roles.recommended.is_empty() {
        println!("No strong role match.");
    }
}

fn print_skills(report: &EvaluationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Skill"),
        header_cell("Average"),
        header_cell("Assessment"),
    ]);
    apply_table_style(&mut table);
    for (skill, average) in report.averages.iter() {
        let assessment = if report.feedback.gaps.iter().any(|gap| gap == skill) {
            Cell::new("Gap").fg(Color::Yellow)
        } else {
            Cell::new("Strength").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(skill),
            Cell::new(format!("{average:.2}")).set_alignment(CellAlignment::Right),
            assessment,
        ]);
    }
    println!("{table}");
}

fn print_plan(report: &EvaluationReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Day"), header_cell("Focus")]);
    apply_table_style(&mut table);
    for entry in &report.feedback.plan {
        table.add_row(vec![Cell::new(&entry.day), Cell::new(&entry.task)]);
    }
    println!("{table}");
}
