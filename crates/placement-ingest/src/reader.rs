//! CSV reading and column type inference.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use placement_model::{CellValue, Column, ColumnType, Dataset};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Infer a column's type from its raw cell values.
///
/// A column is `Integer` when every non-empty cell parses as an integer,
/// `Float` when every non-empty cell parses as a float, otherwise `Text`.
/// A column with no non-empty cells is `Text`: it cannot carry a mean, so it
/// must not qualify as a skill.
fn infer_column_type(values: &[String]) -> ColumnType {
    let mut saw_value = false;
    let mut all_integer = true;
    let mut all_float = true;
    for value in values {
        if value.is_empty() {
            continue;
        }
        saw_value = true;
        if value.parse::<i64>().is_err() {
            all_integer = false;
        }
        if value.parse::<f64>().is_err() {
            all_float = false;
            break;
        }
    }
    if !saw_value {
        ColumnType::Text
    } else if all_integer {
        ColumnType::Integer
    } else if all_float {
        ColumnType::Float
    } else {
        ColumnType::Text
    }
}

fn build_column(name: String, raw_values: Vec<String>) -> Column {
    let dtype = infer_column_type(&raw_values);
    let values = raw_values
        .into_iter()
        .map(|raw| {
            if raw.is_empty() {
                CellValue::Missing
            } else if dtype.is_numeric() {
                match raw.parse::<f64>() {
                    Ok(number) => CellValue::Number(number),
                    // Unreachable given the inference above; keep the raw text
                    // rather than dropping data.
                    Err(_) => CellValue::Text(raw),
                }
            } else {
                CellValue::Text(raw)
            }
        })
        .collect();
    Column::new(name, dtype, values)
}

/// Read a dataset from any CSV source.
///
/// The first record is the header row; headers and cells are trimmed of
/// whitespace and BOM characters. Ragged records surface as
/// [`IngestError::Parse`], a header-only file as [`IngestError::EmptyDataset`].
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        for (index, raw) in record.iter().enumerate() {
            if index < columns.len() {
                columns[index].push(normalize_cell(raw));
            }
        }
        row_count += 1;
    }

    if row_count == 0 {
        return Err(IngestError::EmptyDataset);
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(columns)
        .map(|(name, raw_values)| build_column(name, raw_values))
        .collect();

    let dataset = Dataset::new(columns);
    debug!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Load a dataset from a CSV file on disk.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    read_dataset(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_column_inference() {
        let values = vec!["80".to_string(), "85".to_string()];
        assert_eq!(infer_column_type(&values), ColumnType::Integer);
    }

    #[test]
    fn float_column_inference() {
        let values = vec!["80.5".to_string(), "85".to_string()];
        assert_eq!(infer_column_type(&values), ColumnType::Float);
    }

    #[test]
    fn mixed_column_is_text() {
        let values = vec!["80".to_string(), "strong".to_string()];
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn all_empty_column_is_text() {
        let values = vec![String::new(), String::new()];
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn empty_cells_do_not_block_numeric_inference() {
        let values = vec!["80".to_string(), String::new(), "90".to_string()];
        assert_eq!(infer_column_type(&values), ColumnType::Integer);
    }
}
