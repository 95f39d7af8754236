//! Render model produced by [`Table::view`](crate::table::Table::view).
//!
//! A `TableView` is a snapshot of everything a renderer needs for one frame.
//! Cell content stays opaque; renderers draw it however they draw cells.

use crate::cell::Cell;
use crate::column::{Alignment, ColumnWidth};
use crate::new_rows::NewRowPickerView;
use crate::pagination::{PageSummary, PageTarget};
use crate::row::RowId;
use crate::sort::SortDirection;

#[derive(Debug, Clone)]
pub struct TableView {
    /// Current search text, when the search box is shown.
    pub search: Option<String>,
    pub header: Option<HeaderView>,
    /// Rows on the current page, in display order.
    pub rows: Vec<RowView>,
    /// Shown when `rows` is empty.
    pub empty_message: Option<String>,
    pub footer: Option<FooterView>,
    pub new_rows: Option<NewRowPickerView>,
    /// Whether rows carry a leading checkbox slot.
    pub has_checkboxes: bool,
    /// Whether rows carry a leading expand slot.
    pub has_details: bool,
}

impl TableView {
    /// Number of leading synthetic columns (checkbox, expand affordance).
    pub fn synthetic_columns(&self) -> usize {
        usize::from(self.has_checkboxes) + usize::from(self.has_details)
    }
}

#[derive(Debug, Clone)]
pub struct HeaderView {
    /// Select-all checkbox, when enabled.
    pub all_checkbox: Option<CheckboxView>,
    pub columns: Vec<HeaderCellView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxView {
    pub checked: bool,
    /// Disabled checkboxes are drawn but do not respond.
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderCellView {
    pub id: String,
    pub content: Cell,
    pub align: Alignment,
    pub width: ColumnWidth,
    pub sortable: bool,
    /// Direction, if this is the sorted column.
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone)]
pub struct RowView {
    pub id: RowId,
    /// One cell per column. Missing cells are [`Cell::Empty`].
    pub cells: Vec<Cell>,
    pub checked: bool,
    pub expandable: bool,
    pub expanded: bool,
    /// Detail region, present only while expanded.
    pub detail: Option<DetailView>,
}

/// Layout of an expanded row's detail region.
#[derive(Debug, Clone)]
pub enum DetailView {
    /// A single entry spans the full row width.
    Panel(Cell),
    /// Several entries, one cell each.
    Cells(Vec<Cell>),
}

impl DetailView {
    pub(crate) fn from_entries(entries: &[Cell]) -> Option<Self> {
        match entries {
            [] => None,
            [single] => Some(DetailView::Panel(single.clone())),
            many => Some(DetailView::Cells(many.to_vec())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FooterView {
    pub summary: PageSummary,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// First, previous, current, next and last controls, in that order.
    /// The current page control is never enabled.
    pub controls: Vec<PageControlView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControlView {
    pub target: PageTarget,
    pub enabled: bool,
}

impl PageControlView {
    pub fn label(&self) -> String {
        match self.target {
            PageTarget::First => "«".to_string(),
            PageTarget::Previous => "‹".to_string(),
            PageTarget::Next => "›".to_string(),
            PageTarget::Last => "»".to_string(),
            PageTarget::Page(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_layout() {
        assert!(DetailView::from_entries(&[]).is_none());
        assert!(matches!(
            DetailView::from_entries(&[Cell::text("notes")]),
            Some(DetailView::Panel(_))
        ));
        assert!(matches!(
            DetailView::from_entries(&[Cell::text("a"), Cell::text("b")]),
            Some(DetailView::Cells(cells)) if cells.len() == 2
        ));
    }
}
