//! Markdown rendering of an evaluation report.

use std::fmt::Write;

use chrono::NaiveDate;

use placement_model::EvaluationReport;

/// Render the full evaluation report as a markdown document.
///
/// Deterministic given its inputs; the date stamp is passed in rather than
/// read from a clock so rendering stays reproducible.
pub fn render_markdown(report: &EvaluationReport, generated_on: NaiveDate) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Placement Readiness Report");
    let _ = writeln!(output, "Generated on {generated_on}");

    let _ = writeln!(output);
    let _ = writeln!(output, "## Readiness");
    let _ = writeln!(output, "- Status: {}", report.readiness.status);
    let _ = writeln!(output, "- Average score: {}", report.readiness.average_score);
    let _ = writeln!(output, "- Skills evaluated: {}", report.skills.len());
    let _ = writeln!(output, "- Reasoning: {}", report.readiness.reasoning);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Improvement Suggestions");
    for suggestion in &report.readiness.suggestions {
        let _ = writeln!(output, "- {suggestion}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommended Roles");
    if report.roles.recommended.is_empty() {
        let _ = writeln!(output, "No strong role match.");
    } else {
        for role in &report.roles.recommended {
            let _ = writeln!(output, "- {role}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Not Recommended Roles");
    if report.roles.rejected.is_empty() {
        let _ = writeln!(output, "None.");
    } else {
        for rejected in &report.roles.rejected {
            let _ = writeln!(
                output,
                "- {} (missing: {})",
                rejected.role,
                rejected.missing.join(", ")
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Strengths");
    if report.feedback.strengths.is_empty() {
        let _ = writeln!(output, "No strong skills identified.");
    } else {
        for strength in &report.feedback.strengths {
            let _ = writeln!(output, "- {strength}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Skill Gaps");
    if report.feedback.gaps.is_empty() {
        let _ = writeln!(output, "No critical gaps.");
    } else {
        for gap in &report.feedback.gaps {
            let _ = writeln!(output, "- {gap}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## 7-Day Preparation Plan");
    for entry in &report.feedback.plan {
        let _ = writeln!(output, "- {}: {}", entry.day, entry.task);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Next Actions");
    let _ = writeln!(output, "{}", report.next_action);

    output
}
