//! Single-column sorting.

use std::cmp::Ordering;

use crate::column::Column;
use crate::compare::compare_cells;
use crate::row::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The one active sort key of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Id of the sorted column.
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Sort ascending by a column.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort descending by a column.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Sort state after a header click on `column`.
    ///
    /// Clicking the sorted column flips its direction. Clicking any other
    /// column sorts it ascending and drops the previous key.
    pub fn toggle(current: Option<&SortState>, column: &str) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column: state.column.clone(),
                direction: state.direction.flipped(),
            },
            _ => SortState::ascending(column),
        }
    }

    /// Direction for `column`, if it is the sorted one.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        (self.column == column).then_some(self.direction)
    }
}

/// Reorder `rows` by the active sort key.
///
/// With no sort key, or a key naming a column that does not exist, the order
/// is left untouched. The sort is stable: rows with equal values keep their
/// relative order in both directions.
pub fn sort_rows(rows: &mut [&Row], columns: &[Column], sort: Option<&SortState>) {
    let Some(sort) = sort else {
        return;
    };
    let Some(index) = columns.iter().position(|c| c.id == sort.column) else {
        log::debug!("[sort] unknown sort column {:?}, keeping order", sort.column);
        return;
    };
    let sort_type = columns[index].sort_type;

    rows.sort_by(|a, b| {
        let ordering = match (a.cell(index), b.cell(index)) {
            (Some(x), Some(y)) => compare_cells(x, y, sort_type),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
