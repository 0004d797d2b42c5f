use super::record::HistoryRecord;

/// Derives the stable identity of a history record within one session.
///
/// Priority: store-assigned id, then capture timestamp, then a 32-bit
/// polynomial hash of the content. Total and deterministic; two records are
/// "the same" iff their keys match, even before and after the store assigns
/// an id.
pub fn item_key(record: &HistoryRecord) -> String {
    if let Some(id) = record.id {
        return format!("id-{id}");
    }

    if let Some(timestamp) = record.timestamp {
        return format!("ts-{}", timestamp.timestamp_millis());
    }

    // Base-31 rolling hash over UTF-16 code units, wrapping at 2^32.
    let mut hash: u32 = 0;
    for unit in record.content.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(u32::from(unit));
    }
    format!("content-{hash:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::BaseType;
    use chrono::{TimeZone, Utc};

    fn record(content: &str) -> HistoryRecord {
        HistoryRecord {
            id: None,
            content: content.to_string(),
            raw_content: None,
            base_type: BaseType::Text,
            is_favorite: false,
            timestamp: None,
        }
    }

    #[test]
    fn id_takes_priority() {
        let mut r = record("hello");
        r.id = Some(42);
        r.timestamp = Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());
        assert_eq!(item_key(&r), "id-42");
    }

    #[test]
    fn timestamp_beats_content_hash() {
        let mut r = record("hello");
        r.timestamp = Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());
        assert_eq!(item_key(&r), "ts-1700000000000");
    }

    #[test]
    fn content_hash_matches_rolling_polynomial() {
        // "abc" -> ((0*31 + 97)*31 + 98)*31 + 99 = 96354 = 0x17862
        assert_eq!(item_key(&record("abc")), "content-17862");
        assert_eq!(item_key(&record("")), "content-0");
    }

    #[test]
    fn key_is_deterministic_and_ignores_irrelevant_fields() {
        let mut a = record("same content");
        let mut b = record("same content");
        a.is_favorite = true;
        b.raw_content = Some("<p>same content</p>".into());

        assert_eq!(item_key(&a), item_key(&a));
        assert_eq!(item_key(&a), item_key(&b));
    }

    #[test]
    fn non_ascii_content_hashes_over_utf16_units() {
        // Distinct contents must yield distinct keys here.
        assert_ne!(item_key(&record("你好")), item_key(&record("您好")));
    }
}
