use serde::Serialize;

use crate::history::BaseType;

/// Semantic kind derived from the raw content by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DerivedType {
    Empty,
    Color,
    DataUrlImage,
    DataUrl,
    Url,
    Email,
    EmailLink,
    Phone,
    IpAddress,
    VerificationCode,
    FileUri,
    FilePath,
    FolderPath,
    Json,
    Html,
    Code,
    Text,
}

impl DerivedType {
    pub fn label(&self) -> &'static str {
        match self {
            DerivedType::Empty => "Empty",
            DerivedType::Color => "Color",
            DerivedType::DataUrlImage => "Image data",
            DerivedType::DataUrl => "Data URL",
            DerivedType::Url => "Link",
            DerivedType::Email => "Email address",
            DerivedType::EmailLink => "Mail link",
            DerivedType::Phone => "Phone number",
            DerivedType::IpAddress => "IP address",
            DerivedType::VerificationCode => "Verification code",
            DerivedType::FileUri => "File link",
            DerivedType::FilePath => "File path",
            DerivedType::FolderPath => "Folder path",
            DerivedType::Json => "JSON data",
            DerivedType::Html => "HTML",
            DerivedType::Code => "Code snippet",
            DerivedType::Text => "Text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DerivedType::Empty => "i-carbon-clipboard",
            DerivedType::Color => "i-carbon-color-palette",
            DerivedType::DataUrlImage => "i-carbon-image",
            DerivedType::DataUrl => "i-carbon-data-view",
            DerivedType::Url => "i-carbon-link",
            DerivedType::Email | DerivedType::EmailLink => "i-carbon-email",
            DerivedType::Phone => "i-carbon-phone",
            DerivedType::IpAddress => "i-carbon-locations",
            DerivedType::VerificationCode => "i-carbon-password",
            DerivedType::FileUri | DerivedType::FilePath => "i-carbon-document",
            DerivedType::FolderPath => "i-carbon-folder",
            DerivedType::Json => "i-carbon-braces",
            DerivedType::Html | DerivedType::Code => "i-carbon-code",
            DerivedType::Text => "i-carbon-text-align-left",
        }
    }
}

/// One ordered (label, value) pair of display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaEntry {
    pub label: &'static str,
    pub value: String,
}

impl MetaEntry {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Classification output: everything the list row and detail pane need to
/// render a record. Derived on demand, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    /// The raw content the classification was computed from.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_type: Option<BaseType>,
    #[serde(rename = "type")]
    pub kind: DerivedType,
    pub label: &'static str,
    pub icon: &'static str,
    pub preview_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    /// Normalized color literal, set only for `color` content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_swatch: Option<String>,
    /// Navigable link, when the content resolves to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub meta: Vec<MetaEntry>,
}

impl ContentInfo {
    pub(crate) fn new(content: &str, base_type: Option<BaseType>, kind: DerivedType) -> Self {
        Self {
            content: content.to_string(),
            base_type,
            kind,
            label: kind.label(),
            icon: kind.icon(),
            preview_text: String::new(),
            secondary_text: None,
            color_swatch: None,
            href: None,
            meta: Vec::new(),
        }
    }
}
