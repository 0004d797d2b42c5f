use tokio::sync::mpsc;

use super::errors::StoreError;
use crate::history::HistoryRecord;

/// One page of history as reported by the store.
///
/// `page` and `page_size` are optional because older store versions omit
/// them; the caller falls back to its requested page and last known size.
#[derive(Debug, Clone, Default)]
pub struct HistoryPage {
    pub records: Vec<HistoryRecord>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub total: usize,
}

/// The remote clipboard-history store.
///
/// Applying a record into the active application is an optional capability;
/// implementations that lack it keep the default `supports_apply_to_active_app`
/// and the runtime falls back to the generic RPC channel.
#[async_trait::async_trait]
pub trait HistoryStorePort: Send + Sync {
    async fn fetch_page(
        &self,
        page: u32,
        keyword: Option<&str>,
    ) -> Result<HistoryPage, StoreError>;

    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<(), StoreError>;

    async fn delete_item(&self, id: i64) -> Result<(), StoreError>;

    async fn clear_all(&self) -> Result<(), StoreError>;

    /// Push-notification stream of new or updated records. Each change
    /// carries one record; dropping the receiver unsubscribes.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<HistoryRecord>;

    fn supports_apply_to_active_app(&self) -> bool {
        false
    }

    async fn apply_to_active_app(&self, record: &HistoryRecord) -> Result<bool, StoreError> {
        let _ = record;
        Ok(false)
    }
}
