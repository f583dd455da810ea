//! End-to-end evaluation scenarios over CSV input.

use placement_core::{EvaluationOptions, run_evaluation};
use placement_ingest::{IngestError, read_dataset};
use placement_model::ReadinessStatus;

fn evaluate_csv(csv: &str) -> placement_model::EvaluationReport {
    let dataset = read_dataset(csv.as_bytes()).expect("valid csv");
    run_evaluation(&dataset, &EvaluationOptions::default()).expect("evaluation succeeds")
}

#[test]
fn almost_ready_candidate_with_one_gap() {
    // sql averages 82.5, python 52.5; mean of means is 67.5.
    let report = evaluate_csv("sql,python\n80,50\n85,55\n");

    assert_eq!(report.skills, vec!["sql", "python"]);
    assert_eq!(report.readiness.status, ReadinessStatus::AlmostReady);
    assert_eq!(report.readiness.average_score, 67.5);
    assert_eq!(
        report.readiness.suggestions,
        vec![
            "Improve proficiency in python",
            "Improve proficiency in sql",
            "Practice mock interview questions regularly",
        ]
    );
    assert_eq!(report.feedback.strengths, vec!["sql"]);
    assert_eq!(report.feedback.gaps, vec!["python"]);
    assert_eq!(
        report.next_action,
        "Focus on improving python and reattempt assessment"
    );
}

#[test]
fn strong_candidate_matches_every_role() {
    let report = evaluate_csv("sql,python,dsa,etl\n90,90,90,90\n");

    assert_eq!(report.readiness.status, ReadinessStatus::Ready);
    assert_eq!(report.readiness.average_score, 90.0);
    assert_eq!(
        report.roles.recommended,
        vec!["Junior Data Analyst", "Backend Developer", "Data Engineer"]
    );
    assert!(report.roles.rejected.is_empty());
    assert!(report.feedback.gaps.is_empty());
    assert_eq!(
        report.next_action,
        "Start applying for roles and continue mock interview practice"
    );
}

#[test]
fn all_text_input_aborts_the_pipeline() {
    let dataset = read_dataset("name,grade\nAvery,excellent\n".as_bytes()).expect("valid csv");
    let error =
        run_evaluation(&dataset, &EvaluationOptions::default()).expect_err("no numeric columns");
    assert!(matches!(error, IngestError::NoNumericColumns));
}

#[test]
fn almost_ready_with_two_gaps_names_both() {
    // python 65, dsa 68, sql 72: mean of means is 68.33 -> AlmostReady.
    let report = evaluate_csv("python,dsa,sql\n65,68,72\n");

    assert_eq!(report.readiness.status, ReadinessStatus::AlmostReady);
    assert_eq!(report.feedback.gaps, vec!["python", "dsa"]);
    assert_eq!(
        report.next_action,
        "Focus on improving python, dsa and reattempt assessment"
    );
}

#[test]
fn evaluation_is_idempotent() {
    let dataset = read_dataset("sql,python\n80,50\n85,55\n".as_bytes()).expect("valid csv");
    let options = EvaluationOptions::default();
    let first = run_evaluation(&dataset, &options).expect("first pass");
    let second = run_evaluation(&dataset, &options).expect("second pass");
    assert_eq!(first, second);
}

#[test]
fn text_columns_are_ignored_by_every_stage() {
    let report = evaluate_csv("name,sql\nAvery,80\nBlake,70\n");

    assert_eq!(report.skills, vec!["sql"]);
    assert_eq!(report.readiness.average_score, 75.0);
    assert_eq!(report.readiness.status, ReadinessStatus::Ready);
    assert_eq!(report.roles.recommended, vec!["Junior Data Analyst"]);
}

#[test]
fn report_round_trips_through_json() {
    let report = evaluate_csv("sql,python\n80,50\n85,55\n");
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: placement_model::EvaluationReport =
        serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}
