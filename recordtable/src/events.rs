//! Interaction results and outward callbacks.

use std::fmt;

use crate::row::RowId;

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed; the control was disabled or not applicable.
    Ignored,
    /// State changed or a request was forwarded.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

type CheckedRowsHandler = Box<dyn FnMut(&[RowId])>;
type PageHandler = Box<dyn FnMut(usize)>;

/// Caller callbacks, the table's only channel for reporting changes.
///
/// Each fires synchronously, only in response to a user interaction, and the
/// table never looks at what the callback did.
#[derive(Default)]
pub struct Callbacks {
    on_checked_rows_changed: Option<CheckedRowsHandler>,
    on_page_changed: Option<PageHandler>,
    on_page_size_changed: Option<PageHandler>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the full selection after every selection change.
    pub fn on_checked_rows_changed(mut self, f: impl FnMut(&[RowId]) + 'static) -> Self {
        self.on_checked_rows_changed = Some(Box::new(f));
        self
    }

    /// Called with the requested (external) or new (local) page.
    pub fn on_page_changed(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_page_changed = Some(Box::new(f));
        self
    }

    /// Called with the requested (external) or new (local) page size.
    pub fn on_page_size_changed(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_page_size_changed = Some(Box::new(f));
        self
    }

    pub(crate) fn checked_rows_changed(&mut self, ids: &[RowId]) {
        if let Some(f) = self.on_checked_rows_changed.as_mut() {
            f(ids);
        }
    }

    pub(crate) fn page_changed(&mut self, page: usize) {
        if let Some(f) = self.on_page_changed.as_mut() {
            f(page);
        }
    }

    pub(crate) fn page_size_changed(&mut self, page_size: usize) {
        if let Some(f) = self.on_page_size_changed.as_mut() {
            f(page_size);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_checked_rows_changed", &self.on_checked_rows_changed.is_some())
            .field("on_page_changed", &self.on_page_changed.is_some())
            .field("on_page_size_changed", &self.on_page_size_changed.is_some())
            .finish()
    }
}
