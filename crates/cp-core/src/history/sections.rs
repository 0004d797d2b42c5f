use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

use super::record::HistoryRecord;

const DAY_IN_MS: i64 = 86_400_000;

/// Age bucket for the date-sectioned view of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Today,
    ThreeDays,
    OneWeek,
    OneMonth,
    LastMonth,
    ThreeMonths,
    Forever,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Today,
        SectionKey::ThreeDays,
        SectionKey::OneWeek,
        SectionKey::OneMonth,
        SectionKey::LastMonth,
        SectionKey::ThreeMonths,
        SectionKey::Forever,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Today => "Today",
            SectionKey::ThreeDays => "Last 3 days",
            SectionKey::OneWeek => "Last 7 days",
            SectionKey::OneMonth => "This month",
            SectionKey::LastMonth => "Last month",
            SectionKey::ThreeMonths => "Last 3 months",
            SectionKey::Forever => "Older",
        }
    }
}

/// A record inside a section, carrying its index within the full sorted view
/// so keyboard navigation can keep addressing the flat list.
#[derive(Debug, Clone)]
pub struct SectionEntry<'a> {
    pub record: &'a HistoryRecord,
    pub global_index: usize,
}

#[derive(Debug, Clone)]
pub struct GroupedSection<'a> {
    pub key: SectionKey,
    pub entries: Vec<SectionEntry<'a>>,
}

fn timestamp_millis(record: &HistoryRecord) -> i64 {
    record.timestamp.map(|ts| ts.timestamp_millis()).unwrap_or(0)
}

fn start_of_month_millis(today: NaiveDate, months_back: u32) -> i64 {
    let mut year = today.year();
    let mut month0 = today.month0() as i32 - months_back as i32;
    while month0 < 0 {
        month0 += 12;
        year -= 1;
    }
    let first = NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1)
        .unwrap_or(today)
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default();
    local_millis(first)
}

fn local_millis(naive: chrono::NaiveDateTime) -> i64 {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive).timestamp_millis())
}

/// Buckets records into age sections relative to `now`, newest first.
///
/// Records are re-sorted newest-first inside this view only; the underlying
/// list order stays owned by the store. Empty sections are dropped.
pub fn group_by_age<'a>(
    records: &'a [HistoryRecord],
    now: DateTime<Local>,
) -> Vec<GroupedSection<'a>> {
    let mut sorted: Vec<&HistoryRecord> = records.iter().collect();
    sorted.sort_by_key(|record| std::cmp::Reverse(timestamp_millis(record)));

    let today = now.date_naive();
    let start_of_today = local_millis(today.and_hms_opt(0, 0, 0).unwrap_or_default());
    let start_of_current_month = start_of_month_millis(today, 0);
    let start_of_last_month = start_of_month_millis(today, 1);
    let start_of_three_months = start_of_month_millis(today, 3);

    let resolve = |record: &HistoryRecord| -> SectionKey {
        let millis = timestamp_millis(record);
        if millis <= 0 {
            return SectionKey::Forever;
        }
        if millis >= start_of_today {
            SectionKey::Today
        } else if millis >= start_of_today - 3 * DAY_IN_MS {
            SectionKey::ThreeDays
        } else if millis >= start_of_today - 7 * DAY_IN_MS {
            SectionKey::OneWeek
        } else if millis >= start_of_current_month {
            SectionKey::OneMonth
        } else if millis >= start_of_last_month {
            SectionKey::LastMonth
        } else if millis >= start_of_three_months {
            SectionKey::ThreeMonths
        } else {
            SectionKey::Forever
        }
    };

    let mut sections: Vec<GroupedSection<'a>> = SectionKey::ALL
        .iter()
        .map(|key| GroupedSection {
            key: *key,
            entries: Vec::new(),
        })
        .collect();

    for (global_index, record) in sorted.into_iter().enumerate() {
        let key = resolve(record);
        if let Some(section) = sections.iter_mut().find(|section| section.key == key) {
            section.entries.push(SectionEntry {
                record,
                global_index,
            });
        }
    }

    sections.retain(|section| !section.entries.is_empty());
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::BaseType;
    use chrono::Duration;

    fn record_at(ts: Option<DateTime<Utc>>, content: &str) -> HistoryRecord {
        HistoryRecord {
            id: None,
            content: content.to_string(),
            raw_content: None,
            base_type: BaseType::Text,
            is_favorite: false,
            timestamp: ts,
        }
    }

    #[test]
    fn buckets_today_recent_and_dateless() {
        let now = Local::now();
        let records = vec![
            record_at(Some(now.with_timezone(&Utc) - Duration::minutes(5)), "a"),
            record_at(Some(now.with_timezone(&Utc) - Duration::days(2)), "b"),
            record_at(None, "c"),
        ];

        let sections = group_by_age(&records, now);
        let keys: Vec<_> = sections.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![SectionKey::Today, SectionKey::ThreeDays, SectionKey::Forever]
        );
    }

    #[test]
    fn sorts_newest_first_and_indexes_globally() {
        let now = Local::now();
        let older = record_at(Some(now.with_timezone(&Utc) - Duration::hours(3)), "old");
        let newer = record_at(Some(now.with_timezone(&Utc) - Duration::hours(1)), "new");
        let records = vec![older, newer];

        let sections = group_by_age(&records, now);
        assert_eq!(sections.len(), 1);
        let entries = &sections[0].entries;
        assert_eq!(entries[0].record.content, "new");
        assert_eq!(entries[0].global_index, 0);
        assert_eq!(entries[1].record.content, "old");
        assert_eq!(entries[1].global_index, 1);
    }

    #[test]
    fn empty_sections_are_dropped() {
        let now = Local::now();
        let records = vec![record_at(Some(now.with_timezone(&Utc)), "only")];
        let sections = group_by_age(&records, now);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].key, SectionKey::Today);
    }
}
