//! Row records and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Identifier of a row within one supplied data set.
///
/// Ids only need to be unique within the rows currently handed to the table;
/// they are not assumed stable across unrelated data sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Int(n)
    }
}

impl From<i32> for RowId {
    fn from(n: i32) -> Self {
        RowId::Int(n.into())
    }
}

impl From<u32> for RowId {
    fn from(n: u32) -> Self {
        RowId::Int(n.into())
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId::Str(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId::Str(s)
    }
}

/// A record shown as one table row.
///
/// `columns` holds one cell per column descriptor, in column order.
/// `detail_columns` is the content of the expandable detail region; a row
/// without detail content cannot be expanded.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: RowId,
    pub columns: Vec<Cell>,
    pub detail_columns: Vec<Cell>,
}

impl Row {
    /// Create a row from its id and cells.
    pub fn new(id: impl Into<RowId>, columns: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        Self {
            id: id.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            detail_columns: Vec::new(),
        }
    }

    /// Attach detail content shown when the row is expanded.
    pub fn with_details(mut self, details: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        self.detail_columns = details.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the row has detail content to expand.
    pub fn is_expandable(&self) -> bool {
        !self.detail_columns.is_empty()
    }

    /// Get the cell at a column index, if the row has one.
    pub fn cell(&self, column_index: usize) -> Option<&Cell> {
        self.columns.get(column_index)
    }
}
