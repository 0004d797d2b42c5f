//! Store push notifications.

use tracing::debug;

use cp_core::history::HistoryRecord;

use crate::panel::ClipboardPanel;

impl ClipboardPanel {
    /// Folds one pushed record into the list and moves the selection onto
    /// it. New records land at the top; a record already present is
    /// overlaid in place.
    pub fn handle_change_notification(&mut self, record: HistoryRecord) {
        let key = self.state.apply_change_notification(record);
        debug!(%key, total = self.state.total, "change notification applied");
        self.ensure_selection(Some(&key));
    }
}
