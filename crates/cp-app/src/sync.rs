//! Pagination against the history store.

use tracing::{debug, instrument, warn};

use crate::error::format_error;
use crate::panel::ClipboardPanel;

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Replace the list wholesale and restart paging from page 1.
    pub reset: bool,
    /// Drive the full-screen spinner; background load-more uses the
    /// separate `is_loading_more` flag instead.
    pub show_spinner: bool,
    pub ensure_selection_visible: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            reset: false,
            show_spinner: false,
            ensure_selection_visible: true,
        }
    }
}

impl ClipboardPanel {
    /// Loads a page from the store and folds it into the panel state.
    ///
    /// Incremental loads silently refuse while the history is exhausted or
    /// already fully materialized. Failures surface through the shared
    /// error slot and leave items and paging counters untouched. The
    /// spinner flags are cleared on every exit path.
    #[instrument(name = "panel.load_history", skip(self), fields(reset = options.reset))]
    pub async fn load_history(&mut self, options: LoadOptions) {
        if options.show_spinner || options.reset {
            self.state.error_message = None;
        }

        if options.reset {
            self.state.page = 1;
            self.state.reached_end = false;
        }

        let target_page = if options.reset { 1 } else { self.state.page + 1 };

        if !options.reset && !self.state.can_load_more() {
            return;
        }

        if options.show_spinner {
            self.state.is_loading = true;
        } else if !options.reset {
            self.state.is_loading_more = true;
        }

        let result = self
            .store
            .fetch_page(target_page, self.keyword.as_deref())
            .await;

        match result {
            Ok(payload) => {
                self.state
                    .apply_load_result(options.reset, target_page, payload);
                debug!(
                    page = self.state.page,
                    items = self.state.items.len(),
                    total = self.state.total,
                    reached_end = self.state.reached_end,
                    "history page applied"
                );
                if options.ensure_selection_visible {
                    self.ensure_selection(None);
                }
            }
            Err(error) => {
                warn!(%error, page = target_page, "history fetch failed");
                self.state.error_message = Some(format_error(&error.into()));
            }
        }

        if options.show_spinner {
            self.state.is_loading = false;
        }
        if !options.show_spinner && !options.reset {
            self.state.is_loading_more = false;
        }
    }

    /// Reset load with the full-screen spinner.
    pub async fn refresh_history(&mut self) {
        self.load_history(LoadOptions {
            reset: true,
            show_spinner: true,
            ..LoadOptions::default()
        })
        .await;
    }

    /// Background fetch of the next page; keeps the current selection
    /// where it is.
    pub async fn load_more(&mut self) {
        self.load_history(LoadOptions {
            reset: false,
            show_spinner: false,
            ensure_selection_visible: false,
        })
        .await;
    }
}
