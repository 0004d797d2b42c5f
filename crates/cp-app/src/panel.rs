use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::instrument;

use cp_core::history::HistoryRecord;
use cp_core::ports::{
    BlobResolverPort, HistoryStorePort, NoopUiBridge, RpcChannelPort, SystemClipboardPort,
    UiBridgePort,
};

use crate::state::PanelState;
use crate::sync::LoadOptions;

/// The clipboard-history panel runtime.
///
/// Owns the one mutable [`PanelState`] block and the collaborator ports.
/// All methods take `&mut self`; callers interleave UI events, fetch
/// completions and push notifications cooperatively, never in parallel.
pub struct ClipboardPanel {
    pub(crate) state: PanelState,
    pub(crate) store: Arc<dyn HistoryStorePort>,
    pub(crate) clipboard: Option<Arc<dyn SystemClipboardPort>>,
    pub(crate) rpc: Option<Arc<dyn RpcChannelPort>>,
    pub(crate) blobs: Option<Arc<dyn BlobResolverPort>>,
    pub(crate) ui: Arc<dyn UiBridgePort>,
    pub(crate) keyword: Option<String>,
}

impl ClipboardPanel {
    /// Creates a panel with only the mandatory store collaborator; optional
    /// capabilities are attached with the `with_*` builders.
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self {
            state: PanelState::new(),
            store,
            clipboard: None,
            rpc: None,
            blobs: None,
            ui: Arc::new(NoopUiBridge),
            keyword: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_rpc_channel(mut self, rpc: Arc<dyn RpcChannelPort>) -> Self {
        self.rpc = Some(rpc);
        self
    }

    pub fn with_blob_resolver(mut self, blobs: Arc<dyn BlobResolverPort>) -> Self {
        self.blobs = Some(blobs);
        self
    }

    pub fn with_ui_bridge(mut self, ui: Arc<dyn UiBridgePort>) -> Self {
        self.ui = ui;
        self
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Initial load plus subscription to store push notifications. The
    /// caller drives the returned receiver and feeds each record into
    /// [`ClipboardPanel::handle_change_notification`].
    #[instrument(name = "panel.bootstrap", skip(self))]
    pub async fn bootstrap(&mut self) -> mpsc::UnboundedReceiver<HistoryRecord> {
        self.state.error_message = None;
        self.keyword = None;
        self.load_history(LoadOptions {
            reset: true,
            show_spinner: true,
            ..LoadOptions::default()
        })
        .await;
        self.store.subscribe()
    }

    /// Updates the search keyword and re-runs a reset load against it.
    /// An empty keyword clears the filter.
    pub async fn search(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        self.keyword = if keyword.trim().is_empty() {
            None
        } else {
            Some(keyword)
        };
        self.load_history(LoadOptions {
            reset: true,
            show_spinner: true,
            ..LoadOptions::default()
        })
        .await;
    }
}
