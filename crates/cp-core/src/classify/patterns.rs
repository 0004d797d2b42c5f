//! Regex patterns used by the classification rules.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static DATA_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^data:(?P<mime>[\w/+.-]+);base64,(?P<data>[a-z0-9+/=\s]+)$").unwrap()
});

pub(crate) static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#?(?:[0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap());

pub(crate) static RGB_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*((\d{1,3}%?|\d{1,3}\s*\.\d+%?)\s*,\s*){2}(\d{1,3}%?|\d{1,3}\s*\.\d+%?)(\s*,\s*((?:\d+(?:\.\d+)?|\.\d+)%?))?\s*\)$",
    )
    .unwrap()
});

pub(crate) static HSL_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*\d{1,3}(?:\.\d+)?(?:deg|rad|grad|turn)?\s*,\s*\d{1,3}%\s*,\s*\d{1,3}%\s*(,\s*((?:\d+(?:\.\d+)?|\.\d+)%?))?\)$",
    )
    .unwrap()
});

/// Quick scheme check before paying for a full URL parse.
pub(crate) static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z][a-z0-9+.-]*:").unwrap());

pub(crate) static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[\w.%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

pub(crate) static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{1,4}[-\s]?(?:\d{2,4}[-\s]?){1,4}\d{2,}$").unwrap());

pub(crate) static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4]\d|1?\d?\d)\.){3}(?:25[0-5]|2[0-4]\d|1?\d?\d)$").unwrap()
});

pub(crate) static VERIFICATION_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4,8}$").unwrap());

pub(crate) static WINDOWS_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)^[a-z]:\\[^<>:"|?*\r\n]*$"#).unwrap());

pub(crate) static WINDOWS_DIRECTORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)^[a-z]:\\(?:[^<>:"|?*\r\n]+\\)+$"#).unwrap());

pub(crate) static UNIX_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?:[^\s/]+/)*[^\s/]*$").unwrap());

pub(crate) static UNIX_DIRECTORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?:[^\s/]+/)+$").unwrap());

pub(crate) static TILDE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^~/(?:[^\s/]+/)*[^\s/]*$").unwrap());

pub(crate) static CODE_CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[;{}`]").unwrap());

pub(crate) static FUNCTION_DECL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+\w+").unwrap());

pub(crate) static CONST_DECL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bconst\s+\w+\s*=").unwrap());

pub(crate) static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<\w+[\s>]").unwrap());

pub(crate) static HTML_TAG_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<\w+").unwrap());
