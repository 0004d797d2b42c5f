use super::blob_resolver::ImageBlob;
use super::errors::ClipboardWriteError;

/// Writer for the system clipboard.
///
/// Availability is environment-dependent; the runtime receives this port as
/// an `Option` and reports a capability-missing error instead of probing.
#[async_trait::async_trait]
pub trait SystemClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError>;

    /// Dual-format write: HTML flavor plus its plain-text companion.
    async fn write_rich(&self, html: &str, text: &str) -> Result<(), ClipboardWriteError>;

    async fn write_image(&self, blob: &ImageBlob) -> Result<(), ClipboardWriteError>;
}
