//! Table configuration.

use serde::Deserialize;

use crate::error::{Result, TableError};
use crate::pagination::ClampPolicy;

/// Default rows per page in local pagination.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default page sizes offered by the page-size selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Feature toggles and defaults for a table instance.
///
/// Every toggle defaults independently. Deserializes from the caller's
/// camelCase configuration, filling in anything missing.
///
/// # Example
///
/// ```
/// use recordtable::config::TableOptions;
///
/// let options = TableOptions::new()
///     .searchable()
///     .checkboxes()
///     .multi_select()
///     .paginated(25);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Show the search box and filter rows by it.
    pub can_search: bool,
    /// Show the header row.
    pub has_header: bool,
    /// Show row checkboxes and allow selection.
    pub has_checkboxes: bool,
    /// Show the select-all checkbox in the header (multi-select only).
    pub has_all_check_box: bool,
    /// Toggle rows independently instead of replacing the selection.
    pub multi_select: bool,
    /// Show the pagination block.
    pub has_pagination: bool,
    /// Allow rows with detail content to expand.
    pub has_details: bool,
    /// Initial page size for local pagination.
    pub page_size: usize,
    /// Page sizes offered in local pagination.
    pub items_per_page_options: Vec<usize>,
    /// Where the page lands when the filtered rows shrink past it.
    pub clamp_policy: ClampPolicy,
    /// Shown in place of the body when no rows are visible.
    pub empty_message: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            can_search: false,
            has_header: true,
            has_checkboxes: false,
            has_all_check_box: false,
            multi_select: false,
            has_pagination: false,
            has_details: false,
            page_size: DEFAULT_PAGE_SIZE,
            items_per_page_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            clamp_policy: ClampPolicy::default(),
            empty_message: "No records found".to_string(),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the search box.
    pub fn searchable(mut self) -> Self {
        self.can_search = true;
        self
    }

    /// Hide the header row.
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Enable row checkboxes.
    pub fn checkboxes(mut self) -> Self {
        self.has_checkboxes = true;
        self
    }

    /// Enable multi-select with a select-all checkbox.
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self.has_all_check_box = true;
        self
    }

    /// Enable the pagination block with an initial page size.
    pub fn paginated(mut self, page_size: usize) -> Self {
        self.has_pagination = true;
        self.page_size = page_size;
        self
    }

    /// Set the page sizes offered by the page-size selector.
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.items_per_page_options = options.into();
        self
    }

    /// Enable expandable detail rows.
    pub fn details(mut self) -> Self {
        self.has_details = true;
        self
    }

    /// Set the page clamp policy.
    pub fn clamp_policy(mut self, policy: ClampPolicy) -> Self {
        self.clamp_policy = policy;
        self
    }

    /// Set the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Check the paging settings.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        if self.items_per_page_options.is_empty() {
            return Err(TableError::InvalidPageSizeOptions(
                "at least one option is required".to_string(),
            ));
        }
        if self.items_per_page_options.contains(&0) {
            return Err(TableError::InvalidPageSizeOptions(
                "options must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
