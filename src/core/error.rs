//! Error types for table view-state operations and report loading.
//!
//! - [`TableError`] - a controller call referenced something absent or malformed
//! - [`ReportError`] - the embedded report description could not be turned into tables

use thiserror::Error;

use crate::models::TableId;

/// Failure of a visibility or sort operation.
///
/// Every operation validates before it mutates, so the page is left
/// untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Referenced table is not on the page
    #[error("table '{table}' not found")]
    NotFound { table: TableId },
    /// Column index past the header
    #[error("column {column} out of range (table has {count} columns)")]
    OutOfRange { column: usize, count: usize },
    /// Table lacks a structure the operation depends on
    #[error("table '{table}': {reason}")]
    Structural { table: TableId, reason: String },
}

impl TableError {
    pub(crate) fn structural(table: &TableId, reason: impl Into<String>) -> Self {
        Self::Structural {
            table: table.clone(),
            reason: reason.into(),
        }
    }
}

/// Failure while building the page from its report description.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report description: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate table id '{0}'")]
    DuplicateTable(String),
    #[error("table '{table}': unknown column '{column}'")]
    UnknownColumn { table: String, column: String },
    #[error("table '{table}': row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("table '{table}': summary source '{source_table}' not found")]
    UnknownSummarySource { table: String, source_table: String },
    #[error("table '{table}': summary source '{source_table}' must be a data table")]
    NestedSummary { table: String, source_table: String },
}
