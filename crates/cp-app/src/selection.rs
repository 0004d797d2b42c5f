//! Selection and multi-selection maintenance.
//!
//! Invariant: after any list mutation, `selected_key` either names a record
//! present in `items` or is cleared when the list is empty; the
//! multi-selection set is always a subset of present keys.

use cp_core::history::{item_key, HistoryRecord};

use crate::panel::ClipboardPanel;

impl ClipboardPanel {
    /// Selects a record and asks the UI bridge to scroll it into view.
    pub fn select_item(&mut self, record: &HistoryRecord) {
        let key = item_key(record);
        self.state.selected_item = Some(record.clone());
        self.state.selected_key = Some(key.clone());
        self.ui.ensure_visible(&key);
    }

    /// Re-resolves the selection after a list change.
    ///
    /// Resolution target is `preferred`, falling back to the current key.
    /// A target that is unset or no longer present selects the first item;
    /// a present target re-binds to its latest copy (field overlays produce
    /// new record values, so the detached `selected_item` must refresh).
    pub fn ensure_selection(&mut self, preferred: Option<&str>) {
        if self.state.items.is_empty() {
            self.state.selected_item = None;
            self.state.selected_key = None;
            return;
        }

        let target = preferred
            .map(str::to_string)
            .or_else(|| self.state.selected_key.clone());

        let index = target
            .and_then(|key| self.state.position_of_key(&key))
            .unwrap_or(0);
        let record = self.state.items[index].clone();
        self.select_item(&record);
    }

    /// Selects by index with wrap-around in both directions. No-op on an
    /// empty list.
    pub fn select_by_index(&mut self, index: isize) {
        let len = self.state.items.len();
        if len == 0 {
            return;
        }
        let normalized = index.rem_euclid(len as isize) as usize;
        let record = self.state.items[normalized].clone();
        self.select_item(&record);
    }

    pub fn set_multi_select_mode(&mut self, enabled: bool) {
        if self.state.multi_select_mode == enabled {
            return;
        }
        self.state.multi_select_mode = enabled;
        if !enabled {
            self.clear_multi_selection();
        }
    }

    pub fn toggle_multi_select_mode(&mut self) {
        self.set_multi_select_mode(!self.state.multi_select_mode);
    }

    /// Symmetric-difference update of the multi-selection set.
    pub fn toggle_multi_select_item(&mut self, record: &HistoryRecord) {
        let key = item_key(record);
        if let Some(index) = self
            .state
            .multi_selected_keys
            .iter()
            .position(|existing| existing == &key)
        {
            self.state.multi_selected_keys.remove(index);
        } else {
            self.state.multi_selected_keys.push(key);
        }
    }

    pub fn clear_multi_selection(&mut self) {
        if !self.state.multi_selected_keys.is_empty() {
            self.state.multi_selected_keys.clear();
        }
    }
}
