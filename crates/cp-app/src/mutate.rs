//! Mutations: apply, copy, favorite, delete and clear.
//!
//! Every operation is confirm-then-apply: the store call runs first and the
//! local list only changes for records the store acknowledged. Each
//! operation carries its own pending flag; a second invocation while one is
//! in flight is refused silently.

use std::collections::HashSet;

use anyhow::anyhow;
use serde_json::json;
use tracing::{debug, instrument, warn};

use cp_core::blob::{ensure_tfile_url, is_data_url};
use cp_core::classify::recover_file_list;
use cp_core::history::{item_key, BaseType, HistoryRecord};

use crate::error::format_error;
use crate::panel::ClipboardPanel;

impl ClipboardPanel {
    /// Pastes the selected record into the previously active application.
    ///
    /// Prefers the store's native capability and falls back to the generic
    /// host channel. With neither available the operation reports a
    /// capability-missing error instead of failing silently.
    #[instrument(name = "panel.apply_item", skip(self))]
    pub async fn apply_item(&mut self) -> bool {
        if self.state.apply_pending {
            return false;
        }
        let Some(record) = self.state.selected_item.clone() else {
            return false;
        };

        self.state.apply_pending = true;
        self.state.error_message = None;

        let applied = match self.apply_record(&record).await {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "apply failed");
                self.state.error_message = Some(format_error(&error));
                false
            }
        };

        self.state.apply_pending = false;
        applied
    }

    async fn apply_record(&self, record: &HistoryRecord) -> anyhow::Result<()> {
        // A store that advertises the capability owns the operation outright;
        // a declined apply is a failure, not a cue to retry over RPC.
        if self.store.supports_apply_to_active_app() {
            let handled = self.store.apply_to_active_app(record).await?;
            if !handled {
                return Err(anyhow!("the store declined to apply the record"));
            }
            return Ok(());
        }

        let Some(rpc) = &self.rpc else {
            return Err(anyhow!("applying to the active app is not supported here"));
        };
        let response = rpc
            .send(
                "clipboard:apply-to-active-app",
                Some(json!({ "item": record, "hidePanel": true })),
            )
            .await?;
        if !response.success {
            return Err(anyhow!(response
                .message
                .unwrap_or_else(|| "apply was rejected by the host".to_string())));
        }
        Ok(())
    }

    /// Writes the selected record to the system clipboard in its richest
    /// representation: image bytes for images, the recovered path list for
    /// file records, dual HTML+plain flavors when a raw payload exists, and
    /// plain text otherwise.
    #[instrument(name = "panel.copy_item", skip(self))]
    pub async fn copy_item(&mut self) -> bool {
        if self.state.copy_pending {
            return false;
        }
        let Some(record) = self.state.selected_item.clone() else {
            return false;
        };

        self.state.copy_pending = true;
        self.state.error_message = None;

        let copied = match self.write_record(&record).await {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "copy failed");
                self.state.error_message = Some(format_error(&error));
                false
            }
        };

        self.state.copy_pending = false;
        copied
    }

    async fn write_record(&self, record: &HistoryRecord) -> anyhow::Result<()> {
        let Some(clipboard) = &self.clipboard else {
            return Err(anyhow!("system clipboard is not available here"));
        };

        match record.base_type {
            BaseType::Image => {
                let Some(blobs) = &self.blobs else {
                    return Err(anyhow!("image data cannot be resolved here"));
                };
                let source = if is_data_url(&record.content) {
                    record.content.clone()
                } else {
                    ensure_tfile_url(&record.content)
                };
                let blob = blobs.resolve(&source).await?;
                clipboard.write_image(&blob).await?;
            }
            BaseType::File | BaseType::Files => {
                let source = record.raw_content.as_deref().unwrap_or(&record.content);
                let paths = recover_file_list(source);
                if paths.is_empty() {
                    clipboard.write_text(&record.content).await?;
                } else {
                    clipboard.write_text(&paths.join("\n")).await?;
                }
            }
            _ => match &record.raw_content {
                Some(raw) => clipboard.write_rich(raw, &record.content).await?,
                None => clipboard.write_text(&record.content).await?,
            },
        }
        debug!(key = %item_key(record), "record copied to clipboard");
        Ok(())
    }

    /// Flips the favorite flag of the selected record, store first.
    #[instrument(name = "panel.toggle_favorite", skip(self))]
    pub async fn toggle_favorite(&mut self) {
        if self.state.favorite_pending {
            return;
        }
        let Some(record) = self.state.selected_item.clone() else {
            return;
        };
        let Some(id) = record.id else {
            // Not yet persisted; there is nothing to flag remotely.
            return;
        };

        self.state.favorite_pending = true;
        self.state.error_message = None;

        let favorite = !record.is_favorite;
        match self.store.set_favorite(id, favorite).await {
            Ok(()) => {
                let keys = HashSet::from([item_key(&record)]);
                self.state.set_favorite_by_keys(&keys, favorite);
            }
            Err(error) => {
                warn!(%error, id, "favorite toggle failed");
                self.state.error_message = Some(format_error(&error.into()));
            }
        }

        self.state.favorite_pending = false;
    }

    /// Deletes the selected record. The vanished key makes
    /// `ensure_selection` fall back to the first item.
    #[instrument(name = "panel.delete_selected", skip(self))]
    pub async fn delete_selected(&mut self) {
        if self.state.delete_pending {
            return;
        }
        let Some(record) = self.state.selected_item.clone() else {
            return;
        };
        let Some(id) = record.id else {
            return;
        };

        self.state.delete_pending = true;
        self.state.error_message = None;

        match self.store.delete_item(id).await {
            Ok(()) => {
                self.state.remove_by_keys(&HashSet::from([item_key(&record)]));
                self.ensure_selection(None);
            }
            Err(error) => {
                warn!(%error, id, "delete failed");
                self.state.error_message = Some(format_error(&error.into()));
            }
        }

        self.state.delete_pending = false;
    }

    /// Wipes the whole history.
    #[instrument(name = "panel.clear_history", skip(self))]
    pub async fn clear_history(&mut self) {
        if self.state.is_clearing {
            return;
        }

        self.state.is_clearing = true;
        self.state.error_message = None;

        match self.store.clear_all().await {
            Ok(()) => {
                self.state.items.clear();
                self.state.total = 0;
                self.state.prune_multi_selection();
                self.ensure_selection(None);
            }
            Err(error) => {
                warn!(%error, "clear failed");
                self.state.error_message = Some(format_error(&error.into()));
            }
        }

        self.state.is_clearing = false;
    }

    /// Deletes every multi-selected record, one store call at a time.
    ///
    /// A mid-loop failure aborts the remaining calls; the local list drops
    /// only the records the store confirmed before the abort, and those
    /// keys leave the multi-selection set so a retry targets just the
    /// leftovers.
    #[instrument(name = "panel.bulk_delete", skip(self))]
    pub async fn bulk_delete_selected(&mut self) {
        if self.state.bulk_delete_pending {
            return;
        }
        let targets = self.persisted_multi_selection();
        if targets.is_empty() {
            return;
        }

        self.state.bulk_delete_pending = true;
        self.state.error_message = None;

        let previous_key = self.state.selected_key.clone();
        let mut confirmed: HashSet<String> = HashSet::new();
        for (key, id) in &targets {
            match self.store.delete_item(*id).await {
                Ok(()) => {
                    confirmed.insert(key.clone());
                }
                Err(error) => {
                    warn!(%error, id, confirmed = confirmed.len(), "bulk delete aborted");
                    self.state.error_message = Some(format_error(&error.into()));
                    break;
                }
            }
        }

        let complete = confirmed.len() == targets.len();
        self.state.remove_by_keys(&confirmed);
        if complete {
            self.set_multi_select_mode(false);
        }
        self.ensure_selection(previous_key.as_deref());

        self.state.bulk_delete_pending = false;
    }

    /// Marks every multi-selected record as a favorite. Same
    /// confirmed-only contract as [`ClipboardPanel::bulk_delete_selected`].
    #[instrument(name = "panel.bulk_favorite", skip(self))]
    pub async fn bulk_favorite_selected(&mut self) {
        if self.state.bulk_favorite_pending {
            return;
        }
        let targets = self.persisted_multi_selection();
        if targets.is_empty() {
            return;
        }

        self.state.bulk_favorite_pending = true;
        self.state.error_message = None;

        let mut confirmed: HashSet<String> = HashSet::new();
        for (key, id) in &targets {
            match self.store.set_favorite(*id, true).await {
                Ok(()) => {
                    confirmed.insert(key.clone());
                }
                Err(error) => {
                    warn!(%error, id, confirmed = confirmed.len(), "bulk favorite aborted");
                    self.state.error_message = Some(format_error(&error.into()));
                    break;
                }
            }
        }

        let complete = confirmed.len() == targets.len();
        self.state.set_favorite_by_keys(&confirmed, true);
        if complete {
            self.set_multi_select_mode(false);
        }

        self.state.bulk_favorite_pending = false;
    }

    /// Asks the host to hide the panel window. Absence of the channel and
    /// send failures are both tolerated; hiding is cosmetic.
    pub async fn hide_panel(&mut self) {
        let Some(rpc) = &self.rpc else {
            return;
        };
        if let Err(error) = rpc.send("hide", None).await {
            warn!(%error, "hide request failed");
        }
    }

    /// Multi-selected records that have a store identifier, in list order.
    fn persisted_multi_selection(&self) -> Vec<(String, i64)> {
        self.state
            .multi_selected_items()
            .into_iter()
            .filter_map(|record| record.id.map(|id| (item_key(record), id)))
            .collect()
    }
}
