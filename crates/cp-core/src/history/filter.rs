use super::record::{BaseType, HistoryRecord};

/// Quick-filter values offered by the panel header.
///
/// `file` and `files` records share the `Files` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    Favorites,
    Text,
    Image,
    Files,
    Url,
    Application,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub favorites: usize,
    pub text: usize,
    pub image: usize,
    pub files: usize,
    pub url: usize,
    pub application: usize,
}

impl FilterCounts {
    pub fn get(&self, filter: HistoryFilter) -> usize {
        match filter {
            HistoryFilter::All => self.all,
            HistoryFilter::Favorites => self.favorites,
            HistoryFilter::Text => self.text,
            HistoryFilter::Image => self.image,
            HistoryFilter::Files => self.files,
            HistoryFilter::Url => self.url,
            HistoryFilter::Application => self.application,
        }
    }
}

pub fn count_filters(records: &[HistoryRecord]) -> FilterCounts {
    let mut counts = FilterCounts {
        all: records.len(),
        ..FilterCounts::default()
    };

    for record in records {
        if record.is_favorite {
            counts.favorites += 1;
        }
        match record.base_type {
            BaseType::Text => counts.text += 1,
            BaseType::Image => counts.image += 1,
            BaseType::Url => counts.url += 1,
            BaseType::Application => counts.application += 1,
            BaseType::File | BaseType::Files => counts.files += 1,
            BaseType::Html | BaseType::RichText => {}
        }
    }

    counts
}

pub fn filter_records(records: &[HistoryRecord], filter: HistoryFilter) -> Vec<&HistoryRecord> {
    records
        .iter()
        .filter(|record| match filter {
            HistoryFilter::All => true,
            HistoryFilter::Favorites => record.is_favorite,
            HistoryFilter::Text => record.base_type == BaseType::Text,
            HistoryFilter::Image => record.base_type == BaseType::Image,
            HistoryFilter::Url => record.base_type == BaseType::Url,
            HistoryFilter::Application => record.base_type == BaseType::Application,
            HistoryFilter::Files => {
                matches!(record.base_type, BaseType::File | BaseType::Files)
            }
        })
        .collect()
}

/// Active-filter state. A filter with a zero count cannot be activated, so
/// the panel never shows an empty filtered view.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterSelection {
    active: HistoryFilter,
}

impl FilterSelection {
    pub fn active(&self) -> HistoryFilter {
        self.active
    }

    pub fn has_active_filter(&self) -> bool {
        self.active != HistoryFilter::All
    }

    /// Returns whether the filter was actually switched.
    pub fn set(&mut self, filter: HistoryFilter, counts: &FilterCounts) -> bool {
        if filter != HistoryFilter::All && counts.get(filter) == 0 {
            return false;
        }
        self.active = filter;
        true
    }
}
