//! Column descriptors.

use serde::Deserialize;

use crate::cell::Cell;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// How cell values in a column compare when the column is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Case-insensitive text comparison.
    #[default]
    String,
    /// Numeric comparison of the parsed text.
    Numeric,
    /// Date comparison of the parsed text.
    Date,
}

/// Column width hint. The engine never acts on it; renderers may.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Share of the remaining width, by weight.
    Flex(u16),
    /// Size to content.
    #[default]
    Auto,
}

/// Column configuration.
///
/// Columns are display metadata only. Which column is sorted, and in which
/// direction, lives in the table's [`SortState`](crate::sort::SortState).
///
/// # Examples
///
/// ```
/// use recordtable::column::{Alignment, Column, SortType};
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("revenue", "Revenue")
///         .sortable()
///         .sort_type(SortType::Numeric)
///         .align(Alignment::Right),
/// ];
/// assert!(columns[1].sortable);
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique identifier within a table.
    pub id: String,
    /// Header label.
    pub content: Cell,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// How values compare when sorted.
    pub sort_type: SortType,
    /// Layout hint.
    pub width: ColumnWidth,
}

impl Column {
    /// Create a new column with the given id and header content.
    pub fn new(id: impl Into<String>, content: impl Into<Cell>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            align: Alignment::Left,
            sortable: false,
            sort_type: SortType::String,
            width: ColumnWidth::Auto,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set how values compare when this column is sorted.
    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }
}
