//! The settings view seam.
//!
//! [`SettingsView`] is the typed interface over the bound form controls.
//! The browser client implements it against real widgets; [`FormState`]
//! implements it as plain fields so the whole preferences cycle can run
//! and be tested headlessly.

use crate::prefs::filters::FilterPartition;
use std::collections::HashSet;

/// One entry in a card-set filter list control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSetRow {
    pub id: i64,
    pub name: String,
}

impl CardSetRow {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Typed getters and setters for the bound form controls.
///
/// The preferences manager manipulates only this interface, never
/// concrete widgets. Checkbox getters report the control's checked state,
/// not any stored cookie. Partition row lists are ordered: the order the
/// view reports is the order that gets persisted.
pub trait SettingsView {
    fn hide_connect_quit(&self) -> bool;
    fn set_hide_connect_quit(&mut self, checked: bool);

    fn no_persistent_id(&self) -> bool;
    fn set_no_persistent_id(&mut self, checked: bool);

    /// Raw text of the ignore-list control, newline-delimited.
    fn ignore_list_text(&self) -> String;
    fn set_ignore_list_text(&mut self, text: &str);

    fn desktop_notifications(&self) -> bool;
    fn set_desktop_notifications(&mut self, checked: bool);

    /// Enable or disable the desktop-notifications control. Disabled when
    /// the runtime has no notification support.
    fn set_desktop_notifications_enabled(&mut self, enabled: bool);

    /// Rows of one filter partition control, in display order.
    fn partition_rows(&self, which: FilterPartition) -> Vec<CardSetRow>;

    /// Replace the rows of one filter partition control. Rows no longer
    /// present lose their selection.
    fn set_partition_rows(&mut self, which: FilterPartition, rows: Vec<CardSetRow>);

    /// Ids currently selected in one partition control, in display order.
    fn selected_ids(&self, which: FilterPartition) -> Vec<i64>;
}

/// Headless settings view backed by plain fields.
///
/// Stands in for the form layer in tests, demos, and any shell without a
/// widget toolkit. Selection is exposed through [`FormState::select`] and
/// [`FormState::clear_selection`] so tests can drive transfers.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    hide_connect_quit: bool,
    no_persistent_id: bool,
    ignore_list_text: String,
    desktop_notifications: bool,
    desktop_notifications_enabled: bool,
    partitions: [Vec<CardSetRow>; 3],
    selections: [HashSet<i64>; 3],
}

impl FormState {
    pub fn new() -> Self {
        Self {
            desktop_notifications_enabled: true,
            ..Self::default()
        }
    }

    /// Mark a row selected in a partition control, as a user click would.
    /// Selecting an id that is not in the partition has no effect on
    /// later reads.
    pub fn select(&mut self, which: FilterPartition, id: i64) {
        self.selections[which.index()].insert(id);
    }

    pub fn clear_selection(&mut self, which: FilterPartition) {
        self.selections[which.index()].clear();
    }

    /// Whether the desktop-notifications control accepts input.
    pub fn desktop_notifications_enabled(&self) -> bool {
        self.desktop_notifications_enabled
    }
}

impl SettingsView for FormState {
    fn hide_connect_quit(&self) -> bool {
        self.hide_connect_quit
    }

    fn set_hide_connect_quit(&mut self, checked: bool) {
        self.hide_connect_quit = checked;
    }

    fn no_persistent_id(&self) -> bool {
        self.no_persistent_id
    }

    fn set_no_persistent_id(&mut self, checked: bool) {
        self.no_persistent_id = checked;
    }

    fn ignore_list_text(&self) -> String {
        self.ignore_list_text.clone()
    }

    fn set_ignore_list_text(&mut self, text: &str) {
        self.ignore_list_text = text.to_owned();
    }

    fn desktop_notifications(&self) -> bool {
        self.desktop_notifications
    }

    fn set_desktop_notifications(&mut self, checked: bool) {
        self.desktop_notifications = checked;
    }

    fn set_desktop_notifications_enabled(&mut self, enabled: bool) {
        self.desktop_notifications_enabled = enabled;
    }

    fn partition_rows(&self, which: FilterPartition) -> Vec<CardSetRow> {
        self.partitions[which.index()].clone()
    }

    fn set_partition_rows(&mut self, which: FilterPartition, rows: Vec<CardSetRow>) {
        let present: HashSet<i64> = rows.iter().map(|row| row.id).collect();
        self.selections[which.index()].retain(|id| present.contains(id));
        self.partitions[which.index()] = rows;
    }

    fn selected_ids(&self, which: FilterPartition) -> Vec<i64> {
        self.partitions[which.index()]
            .iter()
            .map(|row| row.id)
            .filter(|id| self.selections[which.index()].contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_follows_rows() {
        let mut form = FormState::new();
        form.set_partition_rows(
            FilterPartition::Neutral,
            vec![CardSetRow::new(1, "Base Set"), CardSetRow::new(2, "Expansion")],
        );
        form.select(FilterPartition::Neutral, 2);
        assert_eq!(form.selected_ids(FilterPartition::Neutral), vec![2]);

        // Replacing the rows drops selection of ids no longer present
        form.set_partition_rows(
            FilterPartition::Neutral,
            vec![CardSetRow::new(1, "Base Set")],
        );
        assert!(form.selected_ids(FilterPartition::Neutral).is_empty());
    }

    #[test]
    fn test_selected_ids_in_display_order() {
        let mut form = FormState::new();
        form.set_partition_rows(
            FilterPartition::Banned,
            vec![
                CardSetRow::new(5, "C"),
                CardSetRow::new(1, "A"),
                CardSetRow::new(3, "B"),
            ],
        );
        form.select(FilterPartition::Banned, 3);
        form.select(FilterPartition::Banned, 5);
        assert_eq!(form.selected_ids(FilterPartition::Banned), vec![5, 3]);
    }

    #[test]
    fn test_selecting_absent_id_reads_back_empty() {
        let mut form = FormState::new();
        form.select(FilterPartition::Required, 9);
        assert!(form.selected_ids(FilterPartition::Required).is_empty());
    }
}
