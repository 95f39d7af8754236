//! "Add rows" picker.
//!
//! Lets the user choose one or more known options to add as new rows. The
//! picker is a self-contained collaborator: it never touches the table's
//! data or selection, it only reports what was chosen.

use std::fmt;

use crate::row::RowId;

/// An option the user can add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOption {
    pub id: RowId,
    pub label: String,
}

impl PickOption {
    pub fn new(id: impl Into<RowId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

type SubmitHandler = Box<dyn FnMut(&[PickOption])>;

/// Multi-select picker over known options.
pub struct NewRowPicker {
    options: Vec<PickOption>,
    query: String,
    chosen: Vec<RowId>,
    on_submit: Option<SubmitHandler>,
}

/// Snapshot of the picker for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRowPickerView {
    pub query: String,
    /// Options offered under the current query, with their chosen state.
    pub options: Vec<(PickOption, bool)>,
    pub can_submit: bool,
}

impl NewRowPicker {
    pub fn new(options: Vec<PickOption>) -> Self {
        Self {
            options,
            query: String::new(),
            chosen: Vec::new(),
            on_submit: None,
        }
    }

    /// Called with the chosen options on submit.
    pub fn on_submit(mut self, f: impl FnMut(&[PickOption]) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn chosen(&self) -> &[RowId] {
        &self.chosen
    }

    /// Options not already present in the table, narrowed by the query.
    pub fn available<'a>(&'a self, existing: &'a [RowId]) -> impl Iterator<Item = &'a PickOption> {
        let needle = self.query.to_lowercase();
        self.options.iter().filter(move |option| {
            !existing.contains(&option.id) && option.label.to_lowercase().contains(&needle)
        })
    }

    /// Toggle an option. Unknown ids are ignored. Returns true if it changed.
    pub fn toggle(&mut self, id: &RowId) -> bool {
        if !self.options.iter().any(|o| &o.id == id) {
            return false;
        }
        if let Some(pos) = self.chosen.iter().position(|c| c == id) {
            self.chosen.remove(pos);
        } else {
            self.chosen.push(id.clone());
        }
        true
    }

    /// Report the chosen options and reset the picker. Returns what was
    /// submitted; nothing is reported when nothing was chosen.
    pub fn submit(&mut self) -> Vec<PickOption> {
        let picked: Vec<PickOption> = self
            .chosen
            .iter()
            .filter_map(|id| self.options.iter().find(|o| &o.id == id).cloned())
            .collect();
        if picked.is_empty() {
            return picked;
        }
        if let Some(f) = self.on_submit.as_mut() {
            f(&picked);
        }
        self.chosen.clear();
        self.query.clear();
        picked
    }

    /// Drop chosen ids that have since become rows of the table.
    pub(crate) fn reconcile(&mut self, existing: &[RowId]) {
        self.chosen.retain(|id| !existing.contains(id));
    }

    pub(crate) fn view(&self, existing: &[RowId]) -> NewRowPickerView {
        NewRowPickerView {
            query: self.query.clone(),
            options: self
                .available(existing)
                .map(|o| (o.clone(), self.chosen.contains(&o.id)))
                .collect(),
            can_submit: !self.chosen.is_empty(),
        }
    }
}

impl fmt::Debug for NewRowPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewRowPicker")
            .field("options", &self.options)
            .field("query", &self.query)
            .field("chosen", &self.chosen)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn picker() -> NewRowPicker {
        NewRowPicker::new(vec![
            PickOption::new("a", "Alpha"),
            PickOption::new("b", "Beta"),
            PickOption::new("g", "Gamma"),
        ])
    }

    #[test]
    fn test_available_excludes_existing_and_filters() {
        let mut picker = picker();
        let existing = [RowId::from("b")];
        let labels: Vec<_> = picker.available(&existing).map(|o| o.label.clone()).collect();
        assert_eq!(labels, vec!["Alpha", "Gamma"]);

        picker.set_query("GAM");
        let labels: Vec<_> = picker.available(&existing).map(|o| o.label.clone()).collect();
        assert_eq!(labels, vec!["Gamma"]);
    }

    #[test]
    fn test_submit_reports_and_resets() {
        let submitted = Rc::new(RefCell::new(Vec::new()));
        let sink = submitted.clone();
        let mut picker = picker().on_submit(move |picked| {
            sink.borrow_mut()
                .extend(picked.iter().map(|o| o.label.clone()));
        });

        assert!(picker.toggle(&RowId::from("g")));
        assert!(picker.toggle(&RowId::from("a")));
        assert!(!picker.toggle(&RowId::from("zzz")));
        let picked = picker.submit();

        assert_eq!(picked.len(), 2);
        assert_eq!(*submitted.borrow(), vec!["Gamma", "Alpha"]);
        assert!(picker.chosen().is_empty());
    }

    #[test]
    fn test_submit_nothing_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let sink = calls.clone();
        let mut picker = picker().on_submit(move |_| *sink.borrow_mut() += 1);
        assert!(picker.submit().is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_view_marks_chosen() {
        let mut picker = picker();
        picker.toggle(&RowId::from("a"));
        let view = picker.view(&[]);
        assert!(view.can_submit);
        assert_eq!(view.options[0], (PickOption::new("a", "Alpha"), true));
        assert!(!view.options[1].1);
    }
}
