//! Row selection.
//!
//! Selection is tracked by row id, in the order rows were selected. It is
//! reconciled against the full data set the caller supplies, never against
//! the filtered or paged view: a selected row hidden by a search stays
//! selected, a row removed from the data does not.

use std::collections::HashSet;

use crate::row::{Row, RowId};

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// Selecting a row replaces the selection.
    Single,
    /// Rows are toggled independently.
    Multiple,
}

impl SelectionMode {
    /// Mode for a table's checkbox and multi-select toggles.
    pub fn from_flags(has_checkboxes: bool, multi_select: bool) -> Self {
        match (has_checkboxes, multi_select) {
            (false, _) => SelectionMode::None,
            (true, false) => SelectionMode::Single,
            (true, true) => SelectionMode::Multiple,
        }
    }
}

/// Id-based selection state.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    mode: SelectionMode,
    selected: Vec<RowId>,
}

impl Selection {
    /// Create an empty selection with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Change the mode. Switching to single mode keeps only the most recent
    /// selection; switching to none clears it.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        match mode {
            SelectionMode::None => self.selected.clear(),
            SelectionMode::Single if self.selected.len() > 1 => {
                let last = self.selected.pop();
                self.selected.clear();
                self.selected.extend(last);
            }
            _ => {}
        }
    }

    /// Selected ids, in selection order.
    pub fn selected(&self) -> &[RowId] {
        &self.selected
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle selection of a row. Returns true if the selection changed.
    ///
    /// In single mode selecting a row replaces the selection, and toggling
    /// the selected row clears it.
    pub fn toggle(&mut self, id: &RowId) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                let was_selected = self.is_selected(id);
                self.selected.clear();
                if !was_selected {
                    self.selected.push(id.clone());
                }
                true
            }
            SelectionMode::Multiple => {
                if let Some(pos) = self.selected.iter().position(|s| s == id) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(id.clone());
                }
                true
            }
        }
    }

    /// Replace the selection with `ids` (select-all over a page).
    /// Returns true if the selection changed.
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a RowId>) -> bool {
        if self.mode != SelectionMode::Multiple {
            return false;
        }
        let mut next: Vec<RowId> = Vec::new();
        for id in ids {
            if !next.contains(id) {
                next.push(id.clone());
            }
        }
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Clear all selection. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Mirror a caller-owned selection, keeping only ids present in `rows`.
    pub fn replace(&mut self, ids: &[RowId], rows: &[Row]) {
        let present: HashSet<&RowId> = rows.iter().map(|r| &r.id).collect();
        self.selected.clear();
        for id in ids {
            if present.contains(id) && !self.selected.contains(id) {
                self.selected.push(id.clone());
            }
        }
        if self.mode == SelectionMode::Single && self.selected.len() > 1 {
            self.selected.truncate(1);
        }
    }

    /// Drop ids that no longer exist in `rows`. Returns the dropped ids.
    pub fn reconcile(&mut self, rows: &[Row]) -> Vec<RowId> {
        let present: HashSet<&RowId> = rows.iter().map(|r| &r.id).collect();
        let (kept, dropped): (Vec<RowId>, Vec<RowId>) = self
            .selected
            .drain(..)
            .partition(|id| present.contains(id));
        self.selected = kept;
        if !dropped.is_empty() {
            log::debug!("[selection] dropped {} stale ids", dropped.len());
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> RowId {
        RowId::Int(n)
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(SelectionMode::from_flags(false, true), SelectionMode::None);
        assert_eq!(SelectionMode::from_flags(true, false), SelectionMode::Single);
        assert_eq!(SelectionMode::from_flags(true, true), SelectionMode::Multiple);
    }

    #[test]
    fn test_none_mode_ignores_toggle() {
        let mut selection = Selection::new(SelectionMode::None);
        assert!(!selection.toggle(&id(1)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_single_mode_replaces_and_clears() {
        let mut selection = Selection::new(SelectionMode::Single);
        selection.toggle(&id(1));
        selection.toggle(&id(2));
        assert_eq!(selection.selected(), &[id(2)]);
        selection.toggle(&id(2));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_multiple_mode_toggles_independently() {
        let mut selection = Selection::new(SelectionMode::Multiple);
        selection.toggle(&id(1));
        selection.toggle(&id(2));
        selection.toggle(&id(3));
        selection.toggle(&id(2));
        assert_eq!(selection.selected(), &[id(1), id(3)]);
    }

    #[test]
    fn test_select_all_replaces_selection() {
        let mut selection = Selection::new(SelectionMode::Multiple);
        selection.toggle(&id(9));
        let page = [id(1), id(2)];
        assert!(selection.select_all(&page));
        assert_eq!(selection.selected(), &page);
        assert!(!selection.select_all(&page));
    }

    #[test]
    fn test_reconcile_drops_only_missing() {
        let mut selection = Selection::new(SelectionMode::Multiple);
        for n in [1, 2, 3] {
            selection.toggle(&id(n));
        }
        let rows = vec![Row::new(1, ["a"]), Row::new(3, ["c"])];
        assert_eq!(selection.reconcile(&rows), vec![id(2)]);
        assert_eq!(selection.selected(), &[id(1), id(3)]);
    }

    #[test]
    fn test_replace_filters_unknown_ids() {
        let mut selection = Selection::new(SelectionMode::Multiple);
        let rows = vec![Row::new(1, ["a"]), Row::new(2, ["b"])];
        selection.replace(&[id(2), id(7), id(2)], &rows);
        assert_eq!(selection.selected(), &[id(2)]);
    }

    #[test]
    fn test_switch_to_single_keeps_latest() {
        let mut selection = Selection::new(SelectionMode::Multiple);
        selection.toggle(&id(1));
        selection.toggle(&id(2));
        selection.set_mode(SelectionMode::Single);
        assert_eq!(selection.selected(), &[id(2)]);
    }
}
