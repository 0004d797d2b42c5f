//! Preview text helpers shared by the classification rules.

/// Collapses all whitespace runs to single spaces and trims the ends.
pub fn cleanup_preview(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to at most `max` characters, replacing the tail with an
/// ellipsis when cut. Character-based, so multi-byte content never splits.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Human-readable byte size, binary-1024 units. Values of 10 and above (or
/// plain bytes) print without decimals, smaller values keep one.
pub fn format_bytes(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut index = 0;
    while value >= 1024.0 && index < UNITS.len() - 1 {
        value /= 1024.0;
        index += 1;
    }

    if value >= 10.0 || index == 0 {
        format!("{:.0} {}", value, UNITS[index])
    } else {
        format!("{:.1} {}", value, UNITS[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(cleanup_preview("  a\n\tb   c  "), "a b c");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        // Unicode content truncates on character boundaries.
        assert_eq!(truncate("你好世界你好", 4), "你好世…");
    }

    #[test]
    fn formats_binary_sizes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(10 * 1024), "10 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024 + 256 * 1024), "5.3 MB");
    }
}
