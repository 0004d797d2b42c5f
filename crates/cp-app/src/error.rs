//! Stringification of failures into the panel's single error slot.

/// Renders an error chain as the user-visible message: the outermost
/// context, then each cause, innermost last.
pub fn format_error(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    for cause in error.chain().skip(1) {
        message.push_str(&format!(": {cause}"));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn renders_error_chain_outermost_first() {
        let inner = anyhow!("connection refused");
        let outer = inner.context("failed to fetch history");
        assert_eq!(
            format_error(&outer),
            "failed to fetch history: connection refused"
        );
    }

    #[test]
    fn renders_plain_error_as_its_message() {
        assert_eq!(format_error(&anyhow!("boom")), "boom");
    }
}
