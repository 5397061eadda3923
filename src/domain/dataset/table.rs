//! Column-oriented table with named, typed columns.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while building or validating tables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// Every absent column is named, in the order requested.
    #[error("Table is missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Column '{column}' has {actual} rows but the table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Column '{0}' already exists")]
    DuplicateColumn(String),
}

impl From<DatasetError> for DomainError {
    fn from(err: DatasetError) -> Self {
        match &err {
            DatasetError::MissingColumns { missing } => {
                DomainError::new(ErrorCode::MissingColumns, err.to_string())
                    .with_detail("columns", missing.join(","))
            }
            _ => DomainError::new(ErrorCode::InvalidFormat, err.to_string()),
        }
    }
}

/// Values of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum Column {
    Date(Vec<NaiveDate>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        match self {
            Column::Date(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values if this is a float column.
    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Column::Float(v) => Some(v),
            _ => None,
        }
    }
}

/// A table of equally long, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column.
    ///
    /// # Errors
    ///
    /// - `DuplicateColumn` if the name is taken
    /// - `LengthMismatch` if the row count differs from existing columns
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self, DatasetError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(DatasetError::DuplicateColumn(name));
        }
        if let Some(expected) = self.row_count() {
            if column.len() != expected {
                return Err(DatasetError::LengthMismatch {
                    column: name,
                    expected,
                    actual: column.len(),
                });
            }
        }
        self.columns.push((name, column));
        Ok(self)
    }

    /// Returns the row count, `None` for a table without columns.
    pub fn row_count(&self) -> Option<usize> {
        self.columns.first().map(|(_, c)| c.len())
    }

    /// Returns the column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns true if a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Returns a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }
}
