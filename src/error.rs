// src/error.rs

use serde::Serialize;
use thiserror::Error;

/// Structural problems that make a single scraped table unusable.
///
/// Cleaning aborts for the offending table only; callers decide whether the
/// rest of the game is still worth keeping.
#[derive(Debug, Error, PartialEq)]
pub enum CleanError {
    #[error("{table}: expected column `{column}` is missing")]
    MissingColumn { table: String, column: String },

    #[error("{table}: column `{column}` row {row} is not a number: {value:?}")]
    NotNumeric {
        table: String,
        column: String,
        row: usize,
        value: String,
    },

    #[error("{table}: table has no rows")]
    EmptyTable { table: String },

    #[error("{table}: expected {expected} rows, found {found}")]
    RowCount {
        table: String,
        expected: usize,
        found: usize,
    },
}

impl CleanError {
    pub fn missing_column(table: &str, column: &str) -> Self {
        CleanError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    pub fn empty_table(table: &str) -> Self {
        CleanError::EmptyTable {
            table: table.to_string(),
        }
    }
}

/// Out-of-order narrative lines. These never abort a parse; the offending
/// line is skipped and the issue is kept alongside the partial result.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogIssue {
    #[error("team header before any inning header: {line:?}")]
    MissingInning { line: String },

    #[error("stat line without an open inning and team: {line:?}")]
    MissingTeam { line: String },

    #[error("inning `{label}` opened twice; earlier entry overwritten")]
    DuplicateInning { label: String },
}
