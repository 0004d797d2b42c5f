/// Side-effect port for "make the selected row visible".
///
/// Best-effort by contract: implementations scroll the row with the given
/// item key into view if it is rendered, and do nothing otherwise.
pub trait UiBridgePort: Send + Sync {
    fn ensure_visible(&self, key: &str);
}

/// Default bridge for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUiBridge;

impl UiBridgePort for NoopUiBridge {
    fn ensure_visible(&self, _key: &str) {}
}
