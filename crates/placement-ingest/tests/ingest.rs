//! Integration tests for CSV ingestion and skill extraction.

use placement_ingest::{IngestError, extract_skills, read_dataset};
use placement_model::ColumnType;

#[test]
fn reads_typed_columns_from_csv() {
    let csv = "name,sql,python\nAvery,80,50.5\nBlake,85,55.5\n";
    let dataset = read_dataset(csv.as_bytes()).expect("valid csv");

    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.column_count(), 3);
    assert_eq!(dataset.column("name").unwrap().dtype, ColumnType::Text);
    assert_eq!(dataset.column("sql").unwrap().dtype, ColumnType::Integer);
    assert_eq!(dataset.column("python").unwrap().dtype, ColumnType::Float);
}

#[test]
fn trims_bom_and_whitespace_in_headers_and_cells() {
    let csv = "\u{feff}sql , python\n 80,  50\n";
    let dataset = read_dataset(csv.as_bytes()).expect("valid csv");

    let names: Vec<&str> = dataset.column_names().collect();
    assert_eq!(names, vec!["sql", "python"]);
    assert_eq!(dataset.column("sql").unwrap().mean(), Some(80.0));
}

#[test]
fn missing_cells_are_skipped_in_column_means() {
    let csv = "sql\n80\n\n90\n";
    let dataset = read_dataset(csv.as_bytes()).expect("valid csv");

    let sql = dataset.column("sql").unwrap();
    assert_eq!(sql.dtype, ColumnType::Integer);
    assert_eq!(sql.mean(), Some(85.0));
}

#[test]
fn all_missing_column_is_not_a_skill() {
    let csv = "sql,scratch\n80,\n85,\n";
    let dataset = read_dataset(csv.as_bytes()).expect("valid csv");

    assert_eq!(dataset.column("scratch").unwrap().dtype, ColumnType::Text);
    let skills = extract_skills(&dataset).expect("sql is numeric");
    assert_eq!(skills, vec!["sql"]);
}

#[test]
fn header_only_file_is_empty_dataset() {
    let csv = "sql,python\n";
    let error = read_dataset(csv.as_bytes()).expect_err("no data rows");
    assert!(matches!(error, IngestError::EmptyDataset));
}

#[test]
fn ragged_rows_are_a_parse_error() {
    let csv = "sql,python\n80,50\n90\n";
    let error = read_dataset(csv.as_bytes()).expect_err("ragged record");
    assert!(matches!(error, IngestError::Parse { .. }));
}

#[test]
fn all_text_csv_has_no_skills() {
    let csv = "name,grade\nAvery,excellent\nBlake,good\n";
    let dataset = read_dataset(csv.as_bytes()).expect("valid csv");
    let error = extract_skills(&dataset).expect_err("no numeric columns");
    assert!(matches!(error, IngestError::NoNumericColumns));
    assert_eq!(
        error.to_string(),
        "no numeric skill columns found in CSV"
    );
}
