use super::key::item_key;
use super::record::HistoryRecord;

/// Merges `incoming` records into `existing`, keyed by item key.
///
/// Unknown keys are appended in incoming order; known keys are overlaid in
/// place (see [`HistoryRecord::overlay`]), preserving the relative order of
/// pre-existing records. The same function serves both "append next page"
/// and "fold in a push-notified change", so both paths share one dedup and
/// update semantics.
pub fn merge_history(existing: &[HistoryRecord], incoming: &[HistoryRecord]) -> Vec<HistoryRecord> {
    let mut next: Vec<HistoryRecord> = existing.to_vec();
    for record in incoming {
        let key = item_key(record);
        match next.iter().position(|candidate| item_key(candidate) == key) {
            None => next.push(record.clone()),
            Some(index) => next[index] = next[index].overlay(record),
        }
    }
    next
}
