//! Domain state: the tab collection, per-table selection, and the extra
//! button, separate from rendering concerns.

use crate::model::table::{Selection, TableGrid};
use crate::model::toggle::ToggleElement;

/// One named tab: a table plus its own row selection.
#[derive(Debug, Clone)]
pub struct TabPane {
    pub label: String,
    pub grid: TableGrid,
    pub selection: Selection,
}

impl TabPane {
    pub fn new(label: impl Into<String>, grid: TableGrid) -> Self {
        Self {
            label: label.into(),
            grid,
            selection: Selection::None,
        }
    }

    /// Select the next row; the first selection action lands on row 0.
    pub fn select_next(&mut self) {
        if self.grid.row_count() == 0 {
            return;
        }
        let last = self.grid.row_count() - 1;
        self.selection = match self.selection {
            Selection::None => Selection::Row(0),
            Selection::Row(index) => Selection::Row((index + 1).min(last)),
        };
    }

    pub fn select_previous(&mut self) {
        if self.grid.row_count() == 0 {
            return;
        }
        self.selection = match self.selection {
            Selection::None => Selection::Row(0),
            Selection::Row(index) => Selection::Row(index.saturating_sub(1)),
        };
    }

    pub fn select_first(&mut self) {
        if self.grid.row_count() > 0 {
            self.selection = Selection::Row(0);
        }
    }

    pub fn select_last(&mut self) {
        if self.grid.row_count() > 0 {
            self.selection = Selection::Row(self.grid.row_count() - 1);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Flip the checked flag of the selected row. No selection, no change.
    pub fn toggle_selected(&mut self) -> bool {
        match self.selection {
            Selection::None => false,
            Selection::Row(index) => self.grid.toggle_checked(index),
        }
    }

    /// Remove the selected row. With no selection this is a no-op; after a
    /// successful removal the selection reverts to none.
    pub fn remove_selected(&mut self) -> bool {
        match self.selection {
            Selection::None => false,
            Selection::Row(index) => {
                let removed = self.grid.remove_row(index).is_some();
                if removed {
                    self.selection = Selection::None;
                }
                removed
            }
        }
    }
}

/// All business data: tabs, the active tab index, and the extra button.
#[derive(Debug, Clone)]
pub struct DomainState {
    tabs: Vec<TabPane>,
    active_tab: usize,
    pub extra_button: ToggleElement,
}

impl DomainState {
    /// Build the tab collection from labels, each tab seeded identically.
    /// At least one tab always exists.
    pub fn new(labels: &[String], initial_rows: usize, columns: usize) -> Self {
        let mut tabs: Vec<TabPane> = labels
            .iter()
            .map(|label| TabPane::new(label.clone(), TableGrid::seeded(initial_rows, columns)))
            .collect();
        if tabs.is_empty() {
            tabs.push(TabPane::new(
                "Table 1",
                TableGrid::seeded(initial_rows, columns),
            ));
        }
        Self {
            tabs,
            active_tab: 0,
            extra_button: ToggleElement::Absent,
        }
    }

    pub fn tabs(&self) -> &[TabPane] {
        &self.tabs
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn current(&self) -> &TabPane {
        &self.tabs[self.active_tab]
    }

    pub fn current_mut(&mut self) -> &mut TabPane {
        &mut self.tabs[self.active_tab]
    }

    /// Switch to the next tab, wrapping. The outgoing table's selection is
    /// cleared, so a tab change always reverts the current selection.
    pub fn next_tab(&mut self) {
        self.current_mut().clear_selection();
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
    }

    pub fn previous_tab(&mut self) {
        self.current_mut().clear_selection();
        self.active_tab = if self.active_tab == 0 {
            self.tabs.len() - 1
        } else {
            self.active_tab - 1
        };
    }

    pub fn toggle_extra_button(&mut self) {
        self.extra_button = self.extra_button.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_at_least_one_tab() {
        let state = DomainState::new(&[], 5, 5);
        assert_eq!(state.tabs().len(), 1);
        assert_eq!(state.current().label, "Table 1");
    }

    #[test]
    fn test_tab_switch_wraps_and_clears_selection() {
        let mut state = DomainState::new(&labels(&["One", "Two"]), 5, 5);
        state.current_mut().select_first();
        assert_eq!(state.current().selection, Selection::Row(0));

        state.next_tab();
        assert_eq!(state.current().label, "Two");
        assert_eq!(state.tabs()[0].selection, Selection::None);

        state.next_tab();
        assert_eq!(state.active_tab(), 0);

        state.previous_tab();
        assert_eq!(state.current().label, "Two");
    }

    #[test]
    fn test_remove_with_no_selection_is_noop() {
        let mut state = DomainState::new(&labels(&["One"]), 10, 5);
        assert!(!state.current_mut().remove_selected());
        assert_eq!(state.current().grid.row_count(), 10);
    }

    #[test]
    fn test_remove_selected_resets_selection() {
        let mut state = DomainState::new(&labels(&["One"]), 10, 5);
        let pane = state.current_mut();
        pane.selection = Selection::Row(3);

        assert!(pane.remove_selected());
        assert_eq!(pane.grid.row_count(), 9);
        assert_eq!(pane.selection, Selection::None);
    }

    #[test]
    fn test_toggle_selected_requires_selection() {
        let mut state = DomainState::new(&labels(&["One"]), 3, 5);
        assert!(!state.current_mut().toggle_selected());

        state.current_mut().select_first();
        assert!(state.current_mut().toggle_selected());
        assert_eq!(state.current().grid.checked_count(), 1);
    }

    #[test]
    fn test_navigation_clamps_at_edges() {
        let mut state = DomainState::new(&labels(&["One"]), 3, 5);
        let pane = state.current_mut();

        pane.select_next();
        assert_eq!(pane.selection, Selection::Row(0));
        pane.select_previous();
        assert_eq!(pane.selection, Selection::Row(0));

        pane.select_last();
        assert_eq!(pane.selection, Selection::Row(2));
        pane.select_next();
        assert_eq!(pane.selection, Selection::Row(2));
    }

    #[test]
    fn test_navigation_on_empty_table_keeps_no_selection() {
        let mut state = DomainState::new(&labels(&["One"]), 0, 5);
        let pane = state.current_mut();
        pane.select_next();
        pane.select_first();
        pane.select_last();
        assert_eq!(pane.selection, Selection::None);
    }

    #[test]
    fn test_extra_button_cycles() {
        let mut state = DomainState::new(&labels(&["One"]), 1, 5);
        assert_eq!(state.extra_button, ToggleElement::Absent);
        state.toggle_extra_button();
        assert_eq!(state.extra_button, ToggleElement::Visible);
        state.toggle_extra_button();
        assert_eq!(state.extra_button, ToggleElement::Hidden);
        state.toggle_extra_button();
        assert_eq!(state.extra_button, ToggleElement::Visible);
    }
}
