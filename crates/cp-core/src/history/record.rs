use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declared origin kind of a history record, as reported by the store.
///
/// This is independent of (and sometimes overrides) the semantic type the
/// classifier derives from the content itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Text,
    Html,
    RichText,
    Image,
    File,
    Files,
    Url,
    Application,
}

impl BaseType {
    pub fn label(&self) -> &'static str {
        match self {
            BaseType::Text => "Text",
            BaseType::Html => "HTML",
            BaseType::RichText => "Rich text",
            BaseType::Image => "Image",
            BaseType::File => "File",
            BaseType::Files => "Files",
            BaseType::Url => "Link",
            BaseType::Application => "Application data",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BaseType::Text => "i-carbon-text-align-left",
            BaseType::Html => "i-carbon-code",
            BaseType::RichText => "i-carbon-text-style",
            BaseType::Image => "i-carbon-image",
            BaseType::File => "i-carbon-document",
            BaseType::Files => "i-carbon-document",
            BaseType::Url => "i-carbon-link",
            BaseType::Application => "i-carbon-application-web",
        }
    }
}

/// One clipboard entry as known to the client.
///
/// `id` is only present once the store has persisted the record; before that
/// the record is identified by timestamp or content hash (see
/// [`super::item_key`]). A record therefore transitions identity the moment
/// the store assigns it an id, which is why list operations always go through
/// key-based lookup instead of reference equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub content: String,

    /// Companion payload, e.g. the HTML flavor of a rich-text copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,

    #[serde(rename = "type")]
    pub base_type: BaseType,

    #[serde(default)]
    pub is_favorite: bool,

    /// Capture time. Missing on records that were produced locally and have
    /// not completed a store round trip yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl HistoryRecord {
    /// Field-level overlay: fields absent on `incoming` keep their existing
    /// value, everything else takes the incoming value. Used by the merge
    /// path so a push-notified partial update never erases known fields.
    pub fn overlay(&self, incoming: &HistoryRecord) -> HistoryRecord {
        HistoryRecord {
            id: incoming.id.or(self.id),
            content: incoming.content.clone(),
            raw_content: incoming
                .raw_content
                .clone()
                .or_else(|| self.raw_content.clone()),
            base_type: incoming.base_type,
            is_favorite: incoming.is_favorite,
            timestamp: incoming.timestamp.or(self.timestamp),
        }
    }
}

/// Short display form of a record timestamp (`MM-dd HH:mm`), or a
/// placeholder when the record never got one.
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%m-%d %H:%M").to_string(),
        None => "No timestamp".to_string(),
    }
}
