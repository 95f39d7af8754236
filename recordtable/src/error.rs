//! Error types
//!
//! Errors only come out of configuration boundaries (building a table,
//! replacing its data, loading JSON). Interactions never fail; they report
//! [`EventResult::Ignored`](crate::events::EventResult::Ignored) instead.

use thiserror::Error;

use crate::row::RowId;

/// Errors raised while configuring a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(String),
    #[error("duplicate row id: {0}")]
    DuplicateRowId(RowId),
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("invalid items-per-page options: {0}")]
    InvalidPageSizeOptions(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected json at {path}: {message}")]
    JsonShape { path: String, message: String },
}

impl TableError {
    pub(crate) fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        TableError::JsonShape {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TableError>;
