use serde::{Deserialize, Serialize};

/// Declared type of a dataset column.
///
/// Columns typed `Integer` or `Float` qualify as skill columns; everything
/// else is carried for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

/// A single cell value.
///
/// Empty cells are `Missing`; numeric columns hold only `Number` and
/// `Missing` cells after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub dtype: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Mean of the column's non-missing numeric values.
    ///
    /// Missing cells are skipped, matching the source system's treatment of
    /// blank entries. Returns `None` when no numeric value is present.
    pub fn mean(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for value in &self.values {
            if let Some(number) = value.as_number() {
                sum += number;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

/// A rectangular in-memory table of candidate assessment data.
///
/// Loaded once per evaluation and immutable afterwards; every downstream
/// evaluator reads it through shared references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from equally sized columns.
    pub fn new(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map_or(0, |column| column.values.len());
        debug_assert!(
            columns.iter().all(|column| column.values.len() == row_count),
            "dataset columns must be rectangular"
        );
        Self { columns, row_count }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }
}

/// Per-skill column means in skill-set order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillAverages {
    entries: Vec<(String, f64)>,
}

impl SkillAverages {
    pub fn push(&mut self, skill: impl Into<String>, average: f64) {
        self.entries.push((skill.into(), average));
    }

    pub fn get(&self, skill: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, average)| *average)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, average)| (name.as_str(), *average))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
