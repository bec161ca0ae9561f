//! Dataset Types
//!
//! Ordered rows with named columns and dynamically typed cells.
//! This is the structure the builder produces and the injection engine
//! copies and mutates. Row order is insertion order, always.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{SynthError, SynthResult};

// ============================================================================
// CELL VALUES
// ============================================================================

/// Dynamically typed cell value
///
/// `Null` is the explicit missing-value marker, distinct from every valid
/// value (empty strings included).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

// ============================================================================
// DATASET
// ============================================================================

/// In-memory table: named columns, ordered rows of `Value` cells
///
/// Columns are fixed at creation time; `add_column` appends a new column to
/// every existing row (or refills an existing one).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create an empty dataset with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row; its arity must match the column count
    pub fn push_row(&mut self, row: Vec<Value>) -> SynthResult<()> {
        if row.len() != self.columns.len() {
            return Err(SynthError::RowArity {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a column filled with `fill` in every row
    ///
    /// If the column already exists, its cells are overwritten in place and
    /// its position is kept.
    pub fn add_column(&mut self, name: &str, fill: Value) {
        if let Some(idx) = self.column_index(name) {
            for row in &mut self.rows {
                row[idx] = fill.clone();
            }
        } else {
            self.columns.push(name.to_string());
            for row in &mut self.rows {
                row.push(fill.clone());
            }
        }
    }

    /// Read one cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Overwrite one cell by row index and column name
    pub fn set(&mut self, row: usize, column: &str, value: Value) -> SynthResult<()> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| SynthError::UnknownColumn(column.to_string()))?;
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(SynthError::RowOutOfBounds(row))?;
        cells[idx] = value;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn two_column_dataset() -> Dataset {
        let mut data = Dataset::new(vec!["level".to_string(), "action".to_string()]);
        data.push_row(vec![Value::Int(3), Value::from("push")]).unwrap();
        data.push_row(vec![Value::Int(7), Value::from("pull")]).unwrap();
        data
    }

    #[test]
    fn test_push_row_checks_arity() {
        let mut data = Dataset::new(vec!["level".to_string()]);
        let err = data.push_row(vec![Value::Int(1), Value::Int(2)]).unwrap_err();
        assert!(matches!(err, SynthError::RowArity { expected: 1, got: 2 }));
        assert_eq!(data.row_count(), 0, "failed push must not add a row");
    }

    #[test]
    fn test_add_column_fills_existing_rows() {
        let mut data = two_column_dataset();
        data.add_column("label", Value::Int(0));

        assert_eq!(data.columns(), &["level", "action", "label"]);
        assert_eq!(data.get(0, "label"), Some(&Value::Int(0)));
        assert_eq!(data.get(1, "label"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_add_column_overwrites_in_place() {
        let mut data = two_column_dataset();
        data.add_column("action", Value::Null);

        assert_eq!(data.columns(), &["level", "action"], "position is kept");
        assert!(data.get(0, "action").unwrap().is_null());
    }

    #[test]
    fn test_get_set_cell() {
        let mut data = two_column_dataset();
        data.set(1, "level", Value::Int(-4)).unwrap();

        assert_eq!(data.get(1, "level"), Some(&Value::Int(-4)));
        assert_eq!(data.get(0, "level"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_set_unknown_column_errors() {
        let mut data = two_column_dataset();
        let err = data.set(0, "missing", Value::Null).unwrap_err();
        assert!(matches!(err, SynthError::UnknownColumn(_)));
    }

    #[test]
    fn test_set_row_out_of_bounds_errors() {
        let mut data = two_column_dataset();
        let err = data.set(9, "level", Value::Null).unwrap_err();
        assert!(matches!(err, SynthError::RowOutOfBounds(9)));
    }

    #[test]
    fn test_zero_row_dataset_keeps_columns() {
        let mut data = Dataset::new(vec!["ts".to_string()]);
        data.add_column("label", Value::Int(0));

        assert!(data.is_empty());
        assert_eq!(data.columns(), &["ts", "label"]);
    }

    #[test]
    fn test_value_display() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::from("push").to_string(), "push");
        assert_eq!(Value::from(ts).to_string(), "2024-01-01T12:00:00+00:00");
    }
}
