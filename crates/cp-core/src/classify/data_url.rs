use super::patterns::DATA_URL_RE;

/// Parsed shape of a `data:<mime>;base64,<payload>` literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDataUrl {
    pub mime: String,
    /// Decoded payload size, computed from the base64 length without
    /// actually decoding: `floor(len * 3 / 4) - padding`.
    pub size: u64,
    pub is_image: bool,
}

pub fn parse_data_url(value: &str) -> Option<ParsedDataUrl> {
    let caps = DATA_URL_RE.captures(value)?;
    let mime = caps.name("mime")?.as_str().to_string();

    let payload: String = caps
        .name("data")?
        .as_str()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let padding = payload.chars().rev().take_while(|&c| c == '=').count() as u64;
    let size = (payload.len() as u64 * 3 / 4).saturating_sub(padding);

    let is_image = mime.starts_with("image/");
    Some(ParsedDataUrl {
        mime,
        size,
        is_image,
    })
}
