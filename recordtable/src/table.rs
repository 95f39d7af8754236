//! Table controller.
//!
//! `Table` owns one instance's state and composes the stages on every
//! change:
//!
//! ```text
//! data -> filter(search) -> sort(sort state) -> processed rows
//!                                               |-> selection reconcile (against data)
//!                                               |-> pagination clamp + slice -> page rows
//! ```
//!
//! Each piece of state has exactly one owner and one set of entry points:
//! the search text (`on_search_input`), the sort key (`on_header_click`),
//! the selection (`on_row_click`, `on_checkbox_click`,
//! `on_all_checkbox_click`), the expansion (`on_row_click`,
//! `on_expand_click`) and the pagination (`on_page_target`,
//! `on_page_size_select`). Caller-side updates come in through the `set_*`
//! methods.
//!
//! # Example
//!
//! ```
//! use recordtable::prelude::*;
//!
//! let columns = vec![Column::new("name", "Name").sortable()];
//! let rows = vec![Row::new(1, ["Bob"]), Row::new(2, ["Amy"])];
//! let mut table = Table::with_rows(columns, rows, TableOptions::new()).unwrap();
//!
//! table.on_header_click("name");
//! let names: Vec<String> = table
//!     .page_rows()
//!     .iter()
//!     .map(|row| row.columns[0].visible_text())
//!     .collect();
//! assert_eq!(names, vec!["Amy", "Bob"]);
//! ```

use std::collections::HashSet;
use std::ops::Range;

use crate::cell::Cell;
use crate::column::Column;
use crate::config::TableOptions;
use crate::error::{Result, TableError};
use crate::events::{Callbacks, EventResult};
use crate::expansion::Expansion;
use crate::filter::filter_rows;
use crate::new_rows::NewRowPicker;
use crate::pagination::{LocalPaging, PageDescriptor, PageTarget, Pagination};
use crate::row::{Row, RowId};
use crate::selection::{Selection, SelectionMode};
use crate::sort::{SortState, sort_rows};
use crate::view::{
    CheckboxView, DetailView, FooterView, HeaderCellView, HeaderView, PageControlView, RowView,
    TableView,
};

/// A table instance.
#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    data: Vec<Row>,
    options: TableOptions,
    search: String,
    sort: Option<SortState>,
    selection: Selection,
    pagination: Pagination,
    expansion: Expansion,
    callbacks: Callbacks,
    new_rows: Option<NewRowPicker>,
}

impl Table {
    /// Create an empty table.
    pub fn new(columns: Vec<Column>, options: TableOptions) -> Result<Self> {
        options.validate()?;
        check_column_ids(&columns)?;
        let selection = Selection::new(SelectionMode::from_flags(
            options.has_checkboxes,
            options.multi_select,
        ));
        let pagination = Pagination::Local(LocalPaging::new(
            options.page_size,
            options.items_per_page_options.clone(),
        ));
        Ok(Self {
            columns,
            data: Vec::new(),
            options,
            search: String::new(),
            sort: None,
            selection,
            pagination,
            expansion: Expansion::new(),
            callbacks: Callbacks::new(),
            new_rows: None,
        })
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<Row>, options: TableOptions) -> Result<Self> {
        let mut table = Self::new(columns, options)?;
        table.set_data(rows)?;
        Ok(table)
    }

    /// Set the outward callbacks.
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Start sorted by a column.
    pub fn with_sort(mut self, sort: SortState) -> Self {
        if self.columns.iter().any(|c| c.id == sort.column) {
            self.sort = Some(sort);
        }
        self
    }

    /// Hand pagination to the caller.
    pub fn with_external_pagination(mut self, descriptor: PageDescriptor) -> Self {
        self.set_pagination_data(descriptor);
        self
    }

    /// Start with a caller-owned selection.
    pub fn with_checked_rows(mut self, ids: &[RowId]) -> Self {
        self.set_checked_rows(ids);
        self
    }

    /// Attach the new-row picker.
    pub fn with_new_row_picker(mut self, picker: NewRowPicker) -> Self {
        self.new_rows = Some(picker);
        self
    }

    // -------------------------------------------------------------------------
    // Caller updates
    // -------------------------------------------------------------------------

    /// Replace the full row set.
    ///
    /// Selected and expanded rows missing from the new data are dropped. In
    /// local pagination the page is clamped to the new row count; external
    /// pagination is left untouched. Rejects data with duplicate ids and
    /// keeps the previous rows.
    pub fn set_data(&mut self, rows: Vec<Row>) -> Result<()> {
        check_row_ids(&rows)?;
        log_shape_mismatches(&self.columns, &rows);

        self.data = rows;
        self.selection.reconcile(&self.data);
        if self.expansion.reconcile(&self.data) {
            log::debug!("[table] collapsed stale expanded row");
        }
        if let Some(picker) = self.new_rows.as_mut() {
            let ids: Vec<RowId> = self.data.iter().map(|r| r.id.clone()).collect();
            picker.reconcile(&ids);
        }
        self.reconcile_page();
        log::trace!("[table] data set: {} rows", self.data.len());
        Ok(())
    }

    /// Replace the column descriptors. A sort on a removed column is dropped.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> Result<()> {
        check_column_ids(&columns)?;
        log_shape_mismatches(&columns, &self.data);
        self.columns = columns;
        let sort_removed = self
            .sort
            .as_ref()
            .is_some_and(|sort| !self.columns.iter().any(|c| c.id == sort.column));
        if sort_removed {
            log::debug!("[table] sort column removed");
            self.sort = None;
        }
        Ok(())
    }

    /// Replace the feature toggles.
    ///
    /// Local pagination picks up a changed page size or option list and goes
    /// back to the first page.
    pub fn set_options(&mut self, options: TableOptions) -> Result<()> {
        options.validate()?;
        self.selection.set_mode(SelectionMode::from_flags(
            options.has_checkboxes,
            options.multi_select,
        ));
        if let Pagination::Local(local) = &mut self.pagination {
            if local.page_size != options.page_size
                || local.items_per_page_options != options.items_per_page_options
            {
                *local =
                    LocalPaging::new(options.page_size, options.items_per_page_options.clone());
            }
        }
        if !options.can_search {
            self.search.clear();
        }
        if !options.has_details {
            self.expansion.collapse();
        }
        self.options = options;
        self.reconcile_page();
        Ok(())
    }

    /// Mirror a caller-owned selection. Unknown ids are dropped and no
    /// callback fires.
    pub fn set_checked_rows(&mut self, ids: &[RowId]) {
        self.selection.replace(ids, &self.data);
    }

    /// Switch to (or update) caller-owned pagination.
    pub fn set_pagination_data(&mut self, descriptor: PageDescriptor) {
        log::trace!(
            "[pagination] external page {}/{} ({} items)",
            descriptor.page,
            descriptor.total_pages,
            descriptor.total_items
        );
        self.pagination = Pagination::External(descriptor);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The full row set as supplied.
    pub fn data(&self) -> &[Row] {
        &self.data
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Selected row ids, in selection order.
    pub fn selected(&self) -> &[RowId] {
        self.selection.selected()
    }

    pub fn expanded(&self) -> Option<&RowId> {
        self.expansion.expanded()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn new_row_picker(&self) -> Option<&NewRowPicker> {
        self.new_rows.as_ref()
    }

    pub fn new_row_picker_mut(&mut self) -> Option<&mut NewRowPicker> {
        self.new_rows.as_mut()
    }

    /// Rows after search and sort, before paging.
    pub fn processed_rows(&self) -> Vec<&Row> {
        let mut rows = filter_rows(&self.data, &self.search);
        sort_rows(&mut rows, &self.columns, self.sort.as_ref());
        rows
    }

    /// Rows on the current page, in display order. A local table without
    /// pagination has a single page holding every processed row.
    pub fn page_rows(&self) -> Vec<&Row> {
        let mut rows = self.processed_rows();
        let range = self.page_range(rows.len());
        rows.truncate(range.end);
        rows.drain(..range.start);
        rows
    }

    /// Whether the select-all checkbox reads as checked: every row of the
    /// current page is selected, and nothing else is.
    pub fn all_checked(&self) -> bool {
        let page = self.page_rows();
        !page.is_empty() && self.selection.len() == page.len()
    }

    // -------------------------------------------------------------------------
    // Interactions
    // -------------------------------------------------------------------------

    /// Search box input.
    pub fn on_search_input(&mut self, text: &str) -> EventResult {
        if !self.options.can_search || self.search == text {
            return EventResult::Ignored;
        }
        self.search = text.to_string();
        self.reconcile_page();
        log::trace!("[table] search {:?}", self.search);
        EventResult::Consumed
    }

    /// Header click on a column. Sortable columns toggle between ascending
    /// and descending; any other sorted column is cleared.
    pub fn on_header_click(&mut self, column_id: &str) -> EventResult {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id == column_id && c.sortable);
        if !sortable {
            return EventResult::Ignored;
        }
        let next = SortState::toggle(self.sort.as_ref(), column_id);
        log::debug!("[table] sort {} {:?}", next.column, next.direction);
        self.sort = Some(next);
        EventResult::Consumed
    }

    /// Click on a row body, outside its checkbox and expand affordance.
    /// Toggles selection (when checkboxes are on) and expansion (when the
    /// row has details).
    pub fn on_row_click(&mut self, id: &RowId) -> EventResult {
        if !self.is_on_page(id) {
            return EventResult::Ignored;
        }
        let selected = self.toggle_selection(id);
        let expanded = self.toggle_expansion(id);
        (selected || expanded).into()
    }

    /// Click on a row's checkbox. Never expands the row.
    pub fn on_checkbox_click(&mut self, id: &RowId) -> EventResult {
        if !self.is_on_page(id) {
            return EventResult::Ignored;
        }
        self.toggle_selection(id).into()
    }

    /// Click on a row's expand affordance. Never changes selection.
    pub fn on_expand_click(&mut self, id: &RowId) -> EventResult {
        if !self.is_on_page(id) {
            return EventResult::Ignored;
        }
        self.toggle_expansion(id).into()
    }

    /// Click on the select-all checkbox.
    ///
    /// Checking selects every row on the current page. Unchecking clears the
    /// whole selection, including rows on other pages.
    pub fn on_all_checkbox_click(&mut self) -> EventResult {
        if !self.all_checkbox_enabled() {
            return EventResult::Ignored;
        }
        let changed = if self.all_checked() {
            self.selection.clear()
        } else {
            let ids: Vec<RowId> = self.page_rows().iter().map(|r| r.id.clone()).collect();
            self.selection.select_all(&ids)
        };
        if changed {
            self.notify_selection();
        }
        changed.into()
    }

    /// Click on a navigation control. Disabled targets are ignored.
    pub fn on_page_target(&mut self, target: PageTarget) -> EventResult {
        if !self.options.has_pagination {
            return EventResult::Ignored;
        }
        let filtered = self.processed_rows().len();
        let Some(page) = self.pagination.resolve(target, filtered) else {
            return EventResult::Ignored;
        };
        if self.pagination.is_external() {
            log::debug!("[pagination] requesting page {page}");
        } else {
            self.pagination.set_local_page(page);
            log::debug!("[pagination] page {page}");
        }
        self.callbacks.page_changed(page);
        EventResult::Consumed
    }

    /// Choice from the page-size selector. Local pagination returns to the
    /// first page.
    ///
    /// The size must be one of the offered options. An external descriptor
    /// that carries no `itemsPerPageOptions` offers the table's configured
    /// ones.
    pub fn on_page_size_select(&mut self, page_size: usize) -> EventResult {
        if !self.options.has_pagination
            || page_size == self.pagination.page_size()
            || !self.page_size_options().contains(&page_size)
        {
            return EventResult::Ignored;
        }
        if self.pagination.is_external() {
            log::debug!("[pagination] requesting page size {page_size}");
        } else {
            self.pagination.set_local_page_size(page_size);
            log::debug!("[pagination] page size {page_size}");
        }
        self.callbacks.page_size_changed(page_size);
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the render model for the current state.
    pub fn view(&self) -> TableView {
        let processed = self.processed_rows();
        let filtered = processed.len();
        let page = &processed[self.page_range(filtered)];

        let header = self.options.has_header.then(|| HeaderView {
            all_checkbox: (self.options.has_checkboxes && self.options.has_all_check_box).then(
                || CheckboxView {
                    checked: self.all_checked(),
                    enabled: self.all_checkbox_enabled(),
                },
            ),
            columns: self
                .columns
                .iter()
                .map(|column| HeaderCellView {
                    id: column.id.clone(),
                    content: column.content.clone(),
                    align: column.align,
                    width: column.width,
                    sortable: column.sortable,
                    sort: self
                        .sort
                        .as_ref()
                        .and_then(|s| s.direction_for(&column.id)),
                })
                .collect(),
        });

        let rows: Vec<RowView> = page.iter().map(|row| self.row_view(row)).collect();
        let empty_message = rows
            .is_empty()
            .then(|| self.options.empty_message.clone());

        let footer = (self.options.has_pagination && self.pagination.has_multiple_pages(filtered))
            .then(|| self.footer_view(filtered));

        let new_rows = self.new_rows.as_ref().map(|picker| {
            let ids: Vec<RowId> = self.data.iter().map(|r| r.id.clone()).collect();
            picker.view(&ids)
        });

        TableView {
            search: self.options.can_search.then(|| self.search.clone()),
            header,
            rows,
            empty_message,
            footer,
            new_rows,
            has_checkboxes: self.options.has_checkboxes,
            has_details: self.options.has_details,
        }
    }

    fn row_view(&self, row: &Row) -> RowView {
        let cells = (0..self.columns.len())
            .map(|i| row.cell(i).cloned().unwrap_or(Cell::Empty))
            .collect();
        let expandable = self.options.has_details && row.is_expandable();
        let expanded = expandable && self.expansion.is_expanded(&row.id);
        RowView {
            id: row.id.clone(),
            cells,
            checked: self.selection.is_selected(&row.id),
            expandable,
            expanded,
            detail: if expanded {
                DetailView::from_entries(&row.detail_columns)
            } else {
                None
            },
        }
    }

    fn footer_view(&self, filtered: usize) -> FooterView {
        let page = self.pagination.page();
        let controls = [
            PageTarget::First,
            PageTarget::Previous,
            PageTarget::Page(page),
            PageTarget::Next,
            PageTarget::Last,
        ]
        .into_iter()
        .map(|target| PageControlView {
            target,
            enabled: self.pagination.resolve(target, filtered).is_some(),
        })
        .collect();
        FooterView {
            summary: self.pagination.summary(filtered),
            page,
            total_pages: self.pagination.total_pages(filtered),
            page_size: self.pagination.page_size(),
            page_size_options: self.page_size_options().to_vec(),
            controls,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn page_range(&self, filtered: usize) -> Range<usize> {
        if self.options.has_pagination || self.pagination.is_external() {
            self.pagination.slice_range(filtered)
        } else {
            0..filtered
        }
    }

    fn page_size_options(&self) -> &[usize] {
        match self.pagination.items_per_page_options() {
            [] => &self.options.items_per_page_options,
            options => options,
        }
    }

    fn is_on_page(&self, id: &RowId) -> bool {
        self.page_rows().iter().any(|row| &row.id == id)
    }

    fn all_checkbox_enabled(&self) -> bool {
        self.options.has_checkboxes
            && self.options.has_all_check_box
            && self.selection.mode() == SelectionMode::Multiple
    }

    fn toggle_selection(&mut self, id: &RowId) -> bool {
        if !self.selection.toggle(id) {
            return false;
        }
        self.notify_selection();
        true
    }

    fn toggle_expansion(&mut self, id: &RowId) -> bool {
        if !self.options.has_details {
            return false;
        }
        let expandable = self
            .data
            .iter()
            .any(|row| &row.id == id && row.is_expandable());
        if !expandable {
            return false;
        }
        self.expansion.toggle(id);
        true
    }

    fn notify_selection(&mut self) {
        let ids = self.selection.selected().to_vec();
        log::trace!("[selection] {} selected", ids.len());
        self.callbacks.checked_rows_changed(&ids);
    }

    fn reconcile_page(&mut self) {
        let filtered = filter_rows(&self.data, &self.search).len();
        self.pagination
            .reconcile(filtered, self.options.clamp_policy);
    }
}

fn check_column_ids(columns: &[Column]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.id.as_str()) {
            return Err(TableError::DuplicateColumnId(column.id.clone()));
        }
    }
    Ok(())
}

fn check_row_ids(rows: &[Row]) -> Result<()> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(&row.id) {
            return Err(TableError::DuplicateRowId(row.id.clone()));
        }
    }
    Ok(())
}

fn log_shape_mismatches(columns: &[Column], rows: &[Row]) {
    let mismatched = rows
        .iter()
        .filter(|row| row.columns.len() != columns.len())
        .count();
    if mismatched > 0 {
        log::debug!(
            "[table] {} of {} rows do not have {} cells",
            mismatched,
            rows.len(),
            columns.len()
        );
    }
}
