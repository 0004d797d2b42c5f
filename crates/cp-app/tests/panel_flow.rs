//! End-to-end panel flows against an in-memory history store.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use cp_app::ClipboardPanel;
use cp_core::history::{item_key, BaseType, HistoryRecord};
use cp_core::ports::{HistoryPage, HistoryStorePort, StoreError};

fn record(id: i64) -> HistoryRecord {
    HistoryRecord {
        id: Some(id),
        content: format!("entry {id}"),
        raw_content: None,
        base_type: BaseType::Text,
        is_favorite: false,
        timestamp: None,
    }
}

struct FakeStore {
    records: Mutex<Vec<HistoryRecord>>,
    page_size: u32,
    fetch_calls: AtomicUsize,
    /// Ids whose delete or favorite call should fail.
    failing_ids: Mutex<HashSet<i64>>,
}

impl FakeStore {
    fn with_records(count: i64, page_size: u32) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new((1..=count).map(record).collect()),
            page_size,
            fetch_calls: AtomicUsize::new(0),
            failing_ids: Mutex::new(HashSet::new()),
        })
    }

    fn fail_for(&self, id: i64) {
        self.failing_ids.lock().unwrap().insert(id);
    }

    fn remaining_ids(&self) -> Vec<i64> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter_map(|record| record.id)
            .collect()
    }
}

#[async_trait]
impl HistoryStorePort for FakeStore {
    async fn fetch_page(
        &self,
        page: u32,
        _keyword: Option<&str>,
    ) -> Result<HistoryPage, StoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        let start = ((page - 1) * self.page_size) as usize;
        let slice: Vec<HistoryRecord> = records
            .iter()
            .skip(start)
            .take(self.page_size as usize)
            .cloned()
            .collect();
        Ok(HistoryPage {
            records: slice,
            page: Some(page),
            page_size: Some(self.page_size),
            total: records.len(),
        })
    }

    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<(), StoreError> {
        if self.failing_ids.lock().unwrap().contains(&id) {
            return Err(StoreError::Backend("favorite rejected".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let target = records
            .iter_mut()
            .find(|record| record.id == Some(id))
            .ok_or_else(|| StoreError::Backend(format!("no record {id}")))?;
        target.is_favorite = favorite;
        Ok(())
    }

    async fn delete_item(&self, id: i64) -> Result<(), StoreError> {
        if self.failing_ids.lock().unwrap().contains(&id) {
            return Err(StoreError::Backend("delete rejected".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| record.id != Some(id));
        if records.len() == before {
            return Err(StoreError::Backend(format!("no record {id}")));
        }
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        self.records.lock().unwrap().clear();
        Ok(())
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<HistoryRecord> {
        let (_tx, rx) = mpsc::unbounded_channel();
        rx
    }
}

#[tokio::test]
async fn pagination_terminates_and_stops_fetching() {
    let store = FakeStore::with_records(25, 10);
    let mut panel = ClipboardPanel::new(store.clone());

    panel.refresh_history().await;
    assert_eq!(panel.state().items.len(), 10);
    assert_eq!(panel.state().total, 25);
    assert!(panel.state().can_load_more());

    panel.load_more().await;
    assert_eq!(panel.state().items.len(), 20);

    panel.load_more().await;
    assert_eq!(panel.state().items.len(), 25);
    assert!(panel.state().reached_end);
    assert!(!panel.state().can_load_more());

    // Exhausted history refuses further fetches without touching the store.
    let fetches = store.fetch_calls.load(Ordering::SeqCst);
    panel.load_more().await;
    assert_eq!(store.fetch_calls.load(Ordering::SeqCst), fetches);
    assert_eq!(panel.state().items.len(), 25);
}

#[tokio::test]
async fn spinner_flags_clear_on_failure() {
    struct BrokenStore;

    #[async_trait]
    impl HistoryStorePort for BrokenStore {
        async fn fetch_page(
            &self,
            _page: u32,
            _keyword: Option<&str>,
        ) -> Result<HistoryPage, StoreError> {
            Err(StoreError::Transport("socket closed".to_string()))
        }
        async fn set_favorite(&self, _id: i64, _favorite: bool) -> Result<(), StoreError> {
            unreachable!()
        }
        async fn delete_item(&self, _id: i64) -> Result<(), StoreError> {
            unreachable!()
        }
        async fn clear_all(&self) -> Result<(), StoreError> {
            unreachable!()
        }
        fn subscribe(&self) -> mpsc::UnboundedReceiver<HistoryRecord> {
            mpsc::unbounded_channel().1
        }
    }

    let mut panel = ClipboardPanel::new(Arc::new(BrokenStore));
    panel.refresh_history().await;

    assert!(!panel.state().is_loading);
    assert!(!panel.state().is_loading_more);
    assert!(panel.state().error_message.is_some());
    assert!(panel.state().items.is_empty());
}

#[tokio::test]
async fn selection_follows_deletes() {
    let store = FakeStore::with_records(3, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;

    // Reset load selects the first item.
    assert_eq!(panel.state().selected_key.as_deref(), Some("id-1"));

    panel.delete_selected().await;
    // The vanished key falls back to the first item.
    assert_eq!(panel.state().selected_key.as_deref(), Some("id-2"));
    assert_eq!(panel.state().total, 2);

    let last = panel.state().items.last().unwrap().clone();
    panel.select_item(&last);
    panel.delete_selected().await;
    assert_eq!(panel.state().selected_key.as_deref(), Some("id-2"));

    panel.delete_selected().await;
    assert!(panel.state().items.is_empty());
    assert_eq!(panel.state().selected_key, None);
    assert!(panel.state().selected_item.is_none());
}

#[tokio::test]
async fn deleting_a_middle_item_selects_the_first() {
    let store = FakeStore::with_records(3, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;

    let middle = panel.state().items[1].clone();
    panel.select_item(&middle);
    panel.delete_selected().await;

    assert_eq!(panel.state().selected_key.as_deref(), Some("id-1"));
    let keys: Vec<String> = panel.state().items.iter().map(item_key).collect();
    assert_eq!(keys, vec!["id-1", "id-3"]);
}

#[tokio::test]
async fn multi_selection_prunes_with_the_list() {
    let store = FakeStore::with_records(3, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;

    panel.set_multi_select_mode(true);
    let items: Vec<HistoryRecord> = panel.state().items.clone();
    for item in &items {
        panel.toggle_multi_select_item(item);
    }
    assert_eq!(panel.state().multi_selected_keys.len(), 3);

    panel.select_item(&items[1]);
    panel.delete_selected().await;

    let keys = &panel.state().multi_selected_keys;
    assert_eq!(keys, &vec!["id-1".to_string(), "id-3".to_string()]);
}

#[tokio::test]
async fn bulk_delete_keeps_only_confirmed_removals_local() {
    let store = FakeStore::with_records(4, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;

    panel.set_multi_select_mode(true);
    let items: Vec<HistoryRecord> = panel.state().items.clone();
    // Target 1, 2 and 3; the store rejects 2.
    for item in items.iter().take(3) {
        panel.toggle_multi_select_item(item);
    }
    store.fail_for(2);

    panel.bulk_delete_selected().await;

    // Only record 1 was confirmed before the abort; 2 and 3 stay in the
    // list and in the multi-selection so a retry hits just them.
    let keys: Vec<String> = panel.state().items.iter().map(item_key).collect();
    assert_eq!(keys, vec!["id-2", "id-3", "id-4"]);
    assert_eq!(
        panel.state().multi_selected_keys,
        vec!["id-2".to_string(), "id-3".to_string()]
    );
    assert!(panel.state().multi_select_mode);
    assert!(panel.state().error_message.is_some());
    assert_eq!(panel.state().total, 3);
    assert_eq!(store.remaining_ids(), vec![2, 3, 4]);
    assert!(!panel.state().bulk_delete_pending);
}

#[tokio::test]
async fn bulk_delete_success_exits_multi_select() {
    let store = FakeStore::with_records(4, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;

    panel.set_multi_select_mode(true);
    let items: Vec<HistoryRecord> = panel.state().items.clone();
    panel.toggle_multi_select_item(&items[0]);
    panel.toggle_multi_select_item(&items[2]);

    panel.bulk_delete_selected().await;

    let keys: Vec<String> = panel.state().items.iter().map(item_key).collect();
    assert_eq!(keys, vec!["id-2", "id-4"]);
    assert!(!panel.state().multi_select_mode);
    assert!(panel.state().multi_selected_keys.is_empty());
    assert!(panel.state().error_message.is_none());
    assert!(panel.state().selected_key.is_some());
}

#[tokio::test]
async fn bulk_favorite_applies_confirmed_flags_only() {
    let store = FakeStore::with_records(3, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;

    panel.set_multi_select_mode(true);
    let items: Vec<HistoryRecord> = panel.state().items.clone();
    for item in &items {
        panel.toggle_multi_select_item(item);
    }
    store.fail_for(2);

    panel.bulk_favorite_selected().await;

    let flags: Vec<bool> = panel
        .state()
        .items
        .iter()
        .map(|record| record.is_favorite)
        .collect();
    assert_eq!(flags, vec![true, false, false]);
    assert!(panel.state().error_message.is_some());
    assert!(panel.state().multi_select_mode);
}

#[tokio::test]
async fn change_notifications_prepend_new_and_overlay_known() {
    let store = FakeStore::with_records(2, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;
    assert_eq!(panel.state().total, 2);

    panel.handle_change_notification(record(7));
    assert_eq!(panel.state().items[0].id, Some(7));
    assert_eq!(panel.state().total, 3);
    assert_eq!(panel.state().selected_key.as_deref(), Some("id-7"));

    // The same record pushed again overlays in place instead of duplicating.
    let mut updated = record(7);
    updated.is_favorite = true;
    panel.handle_change_notification(updated);
    assert_eq!(panel.state().items.len(), 3);
    assert_eq!(panel.state().total, 3);
    assert!(panel.state().items[0].is_favorite);
    assert!(panel.state().selected_item.as_ref().unwrap().is_favorite);
}

#[tokio::test]
async fn clear_history_empties_everything() {
    let store = FakeStore::with_records(5, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;
    panel.set_multi_select_mode(true);
    let first = panel.state().items[0].clone();
    panel.toggle_multi_select_item(&first);

    panel.clear_history().await;

    assert!(panel.state().items.is_empty());
    assert_eq!(panel.state().total, 0);
    assert!(panel.state().selected_key.is_none());
    assert!(panel.state().multi_selected_keys.is_empty());
    assert!(store.remaining_ids().is_empty());
}

#[tokio::test]
async fn search_resets_paging_against_the_keyword() {
    let store = FakeStore::with_records(25, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;
    panel.load_more().await;
    assert_eq!(panel.state().items.len(), 20);

    panel.search("entry").await;
    assert_eq!(panel.keyword(), Some("entry"));
    assert_eq!(panel.state().page, 1);
    assert_eq!(panel.state().items.len(), 10);

    panel.search("   ").await;
    assert_eq!(panel.keyword(), None);
}

#[tokio::test]
async fn favorite_toggle_confirms_before_updating() {
    let store = FakeStore::with_records(2, 10);
    let mut panel = ClipboardPanel::new(store.clone());
    panel.refresh_history().await;

    panel.toggle_favorite().await;
    assert!(panel.state().items[0].is_favorite);
    assert!(panel.state().selected_item.as_ref().unwrap().is_favorite);

    store.fail_for(1);
    panel.toggle_favorite().await;
    // Rejected flip leaves the local flag untouched.
    assert!(panel.state().items[0].is_favorite);
    assert!(panel.state().error_message.is_some());
}
