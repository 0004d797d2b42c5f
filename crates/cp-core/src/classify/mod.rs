//! Content classification engine.
//!
//! Maps a raw clipboard payload (plus the record's declared base type) to a
//! semantic [`DerivedType`] with display label, icon, preview text and
//! metadata. Pure and total: malformed candidate parses are treated as "rule
//! does not apply" and evaluation falls through to the next rule, ending at
//! the plain-text fallback.
//!
//! Rules run in a fixed priority order. Heuristic rules are gated by the
//! declared base type: text heuristics only run for undeclared, `text` or
//! `richtext` records, URL detection additionally for declared `url`
//! records, and path detection additionally for declared `file`/`files`
//! records. An explicitly declared `image` or `application` record bypasses
//! the heuristics and falls through to its typed fallback.

mod data_url;
mod files;
mod info;
mod patterns;
mod preview;


use percent_encoding::percent_decode_str;
use serde_json::Value;
use url::Url;

use crate::history::BaseType;
use patterns::*;

pub use data_url::{parse_data_url, ParsedDataUrl};
pub use files::{parse_json_string_array, recover_file_list, split_file_list};
pub use info::{ContentInfo, DerivedType, MetaEntry};
pub use preview::{cleanup_preview, format_bytes, truncate};

/// Schemes accepted by the URL rule. Everything else is rejected to avoid
/// false positives such as `"border: 1px solid"`.
const ALLOWED_SCHEMES: [&str; 9] = [
    "http", "https", "ftp", "ftps", "file", "mailto", "tel", "ssh", "git",
];

/// Structured companion payload handed in alongside the primary content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawContent {
    Text(String),
    /// Pre-split file-drop list.
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// The record's declared base type, if any.
    pub base_type: Option<BaseType>,
    /// Raw companion payload (e.g. the unparsed file list).
    pub raw_structured: Option<RawContent>,
    /// Preview truncation length, in characters.
    pub max_preview_length: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            base_type: None,
            raw_structured: None,
            max_preview_length: 120,
        }
    }
}

/// Classifies a clipboard payload. See the module docs for rule order.
pub fn classify(content: &str, options: &ClassifyOptions) -> ContentInfo {
    let max_len = options.max_preview_length;
    let base = options.base_type;
    let trimmed = content.trim();

    if trimmed.is_empty() {
        let mut info = ContentInfo::new(content, base, DerivedType::Empty);
        info.preview_text = "(no content)".to_string();
        return info;
    }

    let allow_text = base.map_or(true, |b| matches!(b, BaseType::Text | BaseType::RichText));
    let allow_url = allow_text || base == Some(BaseType::Url);
    let allow_path = allow_text || matches!(base, Some(BaseType::File | BaseType::Files));

    // Structured file-drop list wins outright.
    if let Some(RawContent::List(entries)) = &options.raw_structured {
        if !entries.is_empty() {
            return file_list_info(content, base, entries, max_len);
        }
    }

    // Declared files payload: recover the list from whichever source yields
    // entries first (raw JSON array, content JSON array, plain split).
    if base == Some(BaseType::Files) {
        let mut candidates = match &options.raw_structured {
            Some(RawContent::Text(raw)) => parse_json_string_array(raw),
            _ => Vec::new(),
        };
        if candidates.is_empty() {
            candidates = parse_json_string_array(content);
        }
        if candidates.is_empty() {
            candidates = split_file_list(content);
        }
        if !candidates.is_empty() {
            return file_list_info(content, base, &candidates, max_len);
        }
    }

    if let Some(data_url) = parse_data_url(trimmed) {
        return data_url_info(content, base, trimmed, &data_url, max_len);
    }

    if allow_text && matches_color(trimmed) {
        let normalized = if HEX_COLOR_RE.is_match(trimmed) {
            normalize_hex_color(trimmed)
        } else {
            trimmed.to_string()
        };
        let mut info = ContentInfo::new(content, base, DerivedType::Color);
        info.meta.push(MetaEntry::new("Color", normalized.clone()));
        info.preview_text = normalized.clone();
        info.color_swatch = Some(normalized);
        return info;
    }

    if allow_url {
        if let Some(url) = parse_allowed_url(trimmed) {
            return url_info(content, base, trimmed, &url, max_len);
        }
    }

    if allow_text && EMAIL_RE.is_match(trimmed) {
        let mut info = ContentInfo::new(content, base, DerivedType::Email);
        if let Some(domain) = trimmed.split('@').nth(1) {
            info.meta.push(MetaEntry::new("Domain", domain));
        }
        info.preview_text = trimmed.to_string();
        info.href = Some(format!("mailto:{trimmed}"));
        return info;
    }

    // A bare 4-8 digit run reads as a verification code, never as a phone
    // number or hex color; those rules step aside for it.
    let is_bare_code = VERIFICATION_CODE_RE.is_match(trimmed);

    if allow_text && !is_bare_code && PHONE_RE.is_match(trimmed) {
        let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
        let mut info = ContentInfo::new(content, base, DerivedType::Phone);
        info.meta
            .push(MetaEntry::new("Length", digits.len().to_string()));
        info.preview_text = trimmed.to_string();
        if !digits.is_empty() {
            info.href = Some(format!("tel:{digits}"));
        }
        return info;
    }

    if allow_text && IPV4_RE.is_match(trimmed) {
        let mut info = ContentInfo::new(content, base, DerivedType::IpAddress);
        info.preview_text = trimmed.to_string();
        return info;
    }

    if allow_text && is_bare_code {
        let mut info = ContentInfo::new(content, base, DerivedType::VerificationCode);
        info.meta
            .push(MetaEntry::new("Digits", trimmed.len().to_string()));
        info.preview_text = trimmed.to_string();
        return info;
    }

    if allow_path
        && (WINDOWS_DIRECTORY_RE.is_match(trimmed)
            || UNIX_DIRECTORY_RE.is_match(trimmed)
            || trimmed.ends_with('/')
            || trimmed.ends_with('\\'))
    {
        let mut info = ContentInfo::new(content, base, DerivedType::FolderPath);
        info.preview_text = trimmed.to_string();
        return info;
    }

    if allow_path
        && (WINDOWS_PATH_RE.is_match(trimmed)
            || UNIX_PATH_RE.is_match(trimmed)
            || TILDE_PATH_RE.is_match(trimmed))
    {
        let mut info = ContentInfo::new(content, base, DerivedType::FilePath);
        info.preview_text = trimmed.to_string();
        return info;
    }

    if allow_text && looks_like_json(trimmed) {
        if let Ok(parsed) = serde_json::from_str::<Value>(trimmed) {
            let serialized_len = serde_json::to_string(&parsed)
                .map(|s| s.chars().count())
                .unwrap_or(0);
            let mut info = ContentInfo::new(content, base, DerivedType::Json);
            info.meta
                .push(MetaEntry::new("Size", format!("{serialized_len} chars")));
            if let Value::Object(map) = &parsed {
                if !map.is_empty() {
                    info.meta.push(MetaEntry::new("Keys", map.len().to_string()));
                }
            }
            info.preview_text = truncate(&cleanup_preview(trimmed), max_len);
            return info;
        }
    }

    if allow_text && looks_like_html(trimmed) {
        let tag_count = HTML_TAG_OPEN_RE.find_iter(trimmed).count();
        let mut info = ContentInfo::new(content, base, DerivedType::Html);
        info.meta.push(MetaEntry::new("Tags", tag_count.to_string()));
        info.preview_text = truncate(&cleanup_preview(trimmed), max_len);
        return info;
    }

    if allow_text && looks_like_code(trimmed) {
        let lines: Vec<&str> = trimmed.split('\n').map(|l| l.trim_end_matches('\r')).collect();
        let mut info = ContentInfo::new(content, base, DerivedType::Code);
        info.meta
            .push(MetaEntry::new("Lines", lines.len().to_string()));
        info.preview_text = truncate(&cleanup_preview(lines.first().unwrap_or(&trimmed)), max_len);
        info.secondary_text = Some(truncate(&cleanup_preview(trimmed), max_len));
        return info;
    }

    // Fallback: plain text, labeled by the declared base type when known.
    let mut info = ContentInfo::new(content, base, DerivedType::Text);
    if let Some(base_type) = base {
        info.label = base_type.label();
        info.icon = base_type.icon();
    }
    info.preview_text = truncate(&cleanup_preview(trimmed), max_len);
    info
}

fn matches_color(trimmed: &str) -> bool {
    if HEX_COLOR_RE.is_match(trimmed) {
        // Bare digit runs defer to the verification-code/phone rules.
        return trimmed.starts_with('#') || trimmed.chars().any(|c| c.is_ascii_alphabetic());
    }
    RGB_COLOR_RE.is_match(trimmed) || HSL_COLOR_RE.is_match(trimmed)
}

fn normalize_hex_color(value: &str) -> String {
    let v = value.trim();
    if let Some(stripped) = v.strip_prefix('#') {
        format!("#{}", stripped.to_uppercase())
    } else {
        format!("#{}", v.to_uppercase())
    }
}

fn parse_allowed_url(value: &str) -> Option<Url> {
    if !URL_SCHEME_RE.is_match(value) {
        return None;
    }
    let url = Url::parse(value).ok()?;
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return None;
    }
    Some(url)
}

fn percent_decode(value: &str) -> String {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

fn url_info(
    content: &str,
    base: Option<BaseType>,
    trimmed: &str,
    url: &Url,
    max_len: usize,
) -> ContentInfo {
    if url.scheme() == "file" {
        let path = url.path();
        let is_directory = path.ends_with('/');
        let decoded = {
            let d = percent_decode(path);
            if d.is_empty() {
                "/".to_string()
            } else {
                d
            }
        };
        let kind = if is_directory {
            DerivedType::FolderPath
        } else {
            DerivedType::FileUri
        };
        let mut info = ContentInfo::new(content, base, kind);
        if is_directory {
            info.meta.push(MetaEntry::new("Type", "Folder"));
        }
        info.meta.push(MetaEntry::new("Path", decoded.clone()));
        info.preview_text = decoded;
        info.href = Some(trimmed.to_string());
        return info;
    }

    if url.scheme() == "mailto" {
        let address = percent_decode(url.path());
        let mut info = ContentInfo::new(content, base, DerivedType::EmailLink);
        if !address.is_empty() {
            info.meta.push(MetaEntry::new("Recipient", address.clone()));
        }
        if let Some(query) = url.query() {
            if !query.is_empty() {
                info.meta.push(MetaEntry::new("Params", percent_decode(query)));
            }
        }
        info.preview_text = if address.is_empty() {
            trimmed.to_string()
        } else {
            address
        };
        info.href = Some(trimmed.to_string());
        return info;
    }

    let href = url.as_str().to_string();
    let preview = match url.host_str() {
        Some(host) => {
            let path = url.path();
            if path == "/" {
                host.to_string()
            } else {
                format!("{host}{path}")
            }
        }
        None => href.clone(),
    };

    let mut info = ContentInfo::new(content, base, DerivedType::Url);
    if let Some(query) = url.query() {
        if !query.is_empty() {
            info.meta.push(MetaEntry::new("Query", format!("?{query}")));
        }
    }
    info.meta.push(MetaEntry::new("Protocol", url.scheme()));
    info.preview_text = preview;
    info.secondary_text = Some(truncate(&href, max_len));
    info.href = Some(href);
    info
}

fn data_url_info(
    content: &str,
    base: Option<BaseType>,
    trimmed: &str,
    parsed: &ParsedDataUrl,
    max_len: usize,
) -> ContentInfo {
    let kind = if parsed.is_image {
        DerivedType::DataUrlImage
    } else {
        DerivedType::DataUrl
    };
    let size_label = format_bytes(parsed.size);
    let mut info = ContentInfo::new(content, base, kind);
    info.meta.push(MetaEntry::new("Size", size_label.clone()));
    info.meta.push(MetaEntry::new("MIME", parsed.mime.clone()));
    info.preview_text = format!("{} · {}", parsed.mime, size_label);
    info.secondary_text = Some(truncate(trimmed, max_len));
    info.href = Some(trimmed.to_string());
    info
}

fn file_list_info(
    content: &str,
    base: Option<BaseType>,
    entries: &[String],
    max_len: usize,
) -> ContentInfo {
    let mut info = ContentInfo::new(content, base, DerivedType::FilePath);
    info.preview_text = entries
        .first()
        .map(|entry| cleanup_preview(entry))
        .unwrap_or_default();

    let extra: Vec<String> = entries
        .iter()
        .skip(1)
        .take(3)
        .map(|entry| cleanup_preview(entry))
        .filter(|entry| !entry.is_empty())
        .collect();
    let remainder = entries.len().saturating_sub(4);
    if !extra.is_empty() {
        let mut secondary = extra.join(" · ");
        if remainder > 0 {
            secondary.push_str(&format!(" · +{remainder} more"));
        }
        info.secondary_text = Some(truncate(&secondary, max_len));
    }

    info.meta
        .push(MetaEntry::new("Items", entries.len().to_string()));
    info
}

fn looks_like_json(trimmed: &str) -> bool {
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

fn looks_like_html(trimmed: &str) -> bool {
    trimmed.starts_with('<') && trimmed.ends_with('>') && HTML_TAG_RE.is_match(trimmed)
}

fn looks_like_code(trimmed: &str) -> bool {
    (trimmed.contains('\n') && CODE_CHAR_RE.is_match(trimmed))
        || FUNCTION_DECL_RE.is_match(trimmed)
        || CONST_DECL_RE.is_match(trimmed)
}
