//! Detail expansion. At most one row is expanded at a time.

use crate::row::{Row, RowId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    expanded: Option<RowId>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// The expanded row, if any.
    pub fn expanded(&self) -> Option<&RowId> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: &RowId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Toggle a row. Expanding a row collapses the previously expanded one.
    pub fn toggle(&mut self, id: &RowId) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Collapse if the expanded row is gone from `rows` or has no details
    /// left. Returns true if it collapsed.
    pub fn reconcile(&mut self, rows: &[Row]) -> bool {
        let Some(id) = &self.expanded else {
            return false;
        };
        let still_expandable = rows
            .iter()
            .any(|row| &row.id == id && row.is_expandable());
        if !still_expandable {
            self.expanded = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_toggle() {
        let mut expansion = Expansion::new();
        expansion.toggle(&RowId::Int(1));
        expansion.toggle(&RowId::Int(2));
        assert_eq!(expansion.expanded(), Some(&RowId::Int(2)));
        expansion.toggle(&RowId::Int(2));
        assert_eq!(expansion.expanded(), None);
    }

    #[test]
    fn test_reconcile_collapses_missing_row() {
        let mut expansion = Expansion::new();
        expansion.toggle(&RowId::Int(1));
        let rows = vec![Row::new(1, ["a"]).with_details(["more"])];
        assert!(!expansion.reconcile(&rows));
        assert!(expansion.reconcile(&[Row::new(2, ["b"]).with_details(["x"])]));
        assert_eq!(expansion.expanded(), None);
    }

    #[test]
    fn test_reconcile_collapses_row_without_details() {
        let mut expansion = Expansion::new();
        expansion.toggle(&RowId::Int(1));
        assert!(expansion.reconcile(&[Row::new(1, ["a"])]));
    }
}
