use std::collections::HashSet;

use serde::Serialize;

use cp_core::history::{item_key, merge_history, HistoryRecord};
use cp_core::ports::HistoryPage;

/// The panel's single mutable state block: materialized list window, paging
/// counters, selection, pending flags and the shared error slot.
///
/// Owned exclusively by [`crate::ClipboardPanel`]; the rendering layer only
/// reads it. All list transitions go through the reducer methods below so
/// they stay pure and directly testable.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub items: Vec<HistoryRecord>,
    pub selected_item: Option<HistoryRecord>,
    pub selected_key: Option<String>,

    pub is_loading: bool,
    pub is_loading_more: bool,
    pub is_clearing: bool,
    pub favorite_pending: bool,
    pub delete_pending: bool,
    pub apply_pending: bool,
    pub copy_pending: bool,
    pub bulk_delete_pending: bool,
    pub bulk_favorite_pending: bool,

    /// Last user-visible error; overwritten by each new failure and observed
    /// by the presentation layer as a toast.
    pub error_message: Option<String>,

    pub page: u32,
    pub total: usize,
    /// Store-reported page size; 0 until the first fetch reports one.
    pub page_size: u32,
    /// Sticky once a completed fetch saw the end; cleared by reset fetches
    /// and push notifications.
    pub reached_end: bool,

    pub multi_select_mode: bool,
    pub multi_selected_keys: Vec<String>,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    pub fn can_load_more(&self) -> bool {
        !self.reached_end && self.items.len() < self.total
    }

    /// Position of the selected key in `items`, if any.
    pub fn active_index(&self) -> Option<usize> {
        let key = self.selected_key.as_deref()?;
        self.items.iter().position(|record| item_key(record) == key)
    }

    pub fn position_of_key(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|record| item_key(record) == key)
    }

    pub fn multi_selected_items(&self) -> Vec<&HistoryRecord> {
        if self.multi_selected_keys.is_empty() {
            return Vec::new();
        }
        let keys: HashSet<&str> = self.multi_selected_keys.iter().map(String::as_str).collect();
        self.items
            .iter()
            .filter(|record| keys.contains(item_key(record).as_str()))
            .collect()
    }

    /// Drops multi-selection keys that no longer name a record in `items`,
    /// preserving selection order. Called after every list mutation.
    pub fn prune_multi_selection(&mut self) {
        if self.multi_selected_keys.is_empty() {
            return;
        }
        let existing: HashSet<String> = self.items.iter().map(item_key).collect();
        self.multi_selected_keys
            .retain(|key| existing.contains(key));
    }

    /// Reducer for a completed page fetch.
    ///
    /// Resets replace the list wholesale; incremental loads merge by key.
    /// `reached_end` turns true on a reset that fetched less than a page,
    /// or on an incremental load that fetched nothing, saw the store report
    /// an earlier page than requested, came up short of the page size, or
    /// failed to grow the merged list (duplicate-page drift guard).
    pub fn apply_load_result(&mut self, reset: bool, requested_page: u32, payload: HistoryPage) {
        let previous_len = if reset { 0 } else { self.items.len() };
        let fetched = payload.records.len();
        let resolved_page = payload.page.unwrap_or(requested_page);
        if let Some(page_size) = payload.page_size {
            self.page_size = page_size;
        }

        self.page = resolved_page;
        self.total = payload.total;

        if reset {
            self.items = payload.records;
        } else {
            self.items = merge_history(&self.items, &payload.records);
        }
        let next_len = self.items.len();

        self.reached_end = if reset {
            let has_more = if self.page_size > 0 {
                fetched >= self.page_size as usize
            } else {
                fetched > 0
            };
            !has_more
        } else {
            fetched == 0
                || resolved_page < requested_page
                || (self.page_size > 0 && fetched < self.page_size as usize)
                || next_len == previous_len
        };

        self.prune_multi_selection();
    }

    /// Reducer for one push-notified record. New keys are prepended (the
    /// notification is the newest activity) and counted into `total`; known
    /// keys are overlaid in place. Either way pagination reopens, and the
    /// caller re-resolves selection with the returned key.
    pub fn apply_change_notification(&mut self, record: HistoryRecord) -> String {
        let key = item_key(&record);
        match self.position_of_key(&key) {
            None => {
                self.items.insert(0, record);
                self.total += 1;
            }
            Some(index) => {
                self.items[index] = self.items[index].overlay(&record);
            }
        }
        self.reached_end = false;
        key
    }

    /// Removes all records whose key is in `keys`; returns how many went.
    pub fn remove_by_keys(&mut self, keys: &HashSet<String>) -> usize {
        let before = self.items.len();
        self.items.retain(|record| !keys.contains(&item_key(record)));
        let removed = before - self.items.len();
        self.total = self.total.saturating_sub(removed);
        self.prune_multi_selection();
        removed
    }

    /// Splices a favorite flag into every record named by `keys`, and into
    /// the detached `selected_item` copy when it is one of them.
    pub fn set_favorite_by_keys(&mut self, keys: &HashSet<String>, favorite: bool) {
        for record in &mut self.items {
            if keys.contains(&item_key(record)) {
                record.is_favorite = favorite;
            }
        }
        if let Some(selected) = self.selected_item.as_mut() {
            if keys.contains(&item_key(selected)) {
                selected.is_favorite = favorite;
            }
        }
    }
}
