//! History record model and list-level operations.

pub mod filter;
pub mod key;
pub mod merge;
pub mod record;
pub mod sections;

pub use filter::{count_filters, filter_records, FilterCounts, FilterSelection, HistoryFilter};
pub use key::item_key;
pub use merge::merge_history;
pub use record::{format_timestamp, BaseType, HistoryRecord};
pub use sections::{group_by_age, GroupedSection, SectionEntry, SectionKey};
