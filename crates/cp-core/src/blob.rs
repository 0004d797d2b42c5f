//! Normalization of opaque content strings into fetchable resource URLs.
//!
//! Image records store either a data URL or a bare file reference; the blob
//! resolver only understands proper URLs, so bare paths are rewritten onto
//! the host's `tfile://` asset scheme first.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Everything `encodeURI` would escape, plus `#` (fragments would truncate
/// the asset path on the host side).
const TFILE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static PASSTHROUGH_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:tfile|data|https?|blob):").unwrap());

static FILE_SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^file:").unwrap());

static WINDOWS_DRIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]:[\\/]").unwrap());

/// Returns whether the content is an inline data URL (already fetchable).
pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}

/// Rewrites a content string into a `tfile://` URL the host asset protocol
/// can serve. Already-fetchable URLs pass through untouched.
pub fn ensure_tfile_url(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "tfile://".to_string();
    }

    if PASSTHROUGH_SCHEME_RE.is_match(trimmed) {
        return trimmed.to_string();
    }

    if FILE_SCHEME_RE.is_match(trimmed) {
        return format!("tfile:{}", &trimmed[5..]);
    }

    let is_windows_path = WINDOWS_DRIVE_RE.is_match(trimmed);
    let normalized = if is_windows_path {
        trimmed.replace('\\', "/")
    } else {
        trimmed.to_string()
    };
    let encoded = utf8_percent_encode(&normalized, TFILE_ENCODE_SET).to_string();

    if is_windows_path || encoded.starts_with('/') {
        format!("tfile:///{}", encoded.trim_start_matches('/'))
    } else {
        format!("tfile://{encoded}")
    }
}
