use bytes::Bytes;

use super::errors::BlobError;

/// Resolved binary payload of an image record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub bytes: Bytes,
    /// Reported MIME type; `image/png` is assumed when the source didn't say.
    pub mime: Option<String>,
}

/// Resolves a content string (data URL or `tfile://` asset reference) into
/// its byte blob. Only the image copy path needs this.
#[async_trait::async_trait]
pub trait BlobResolverPort: Send + Sync {
    async fn resolve(&self, source: &str) -> Result<ImageBlob, BlobError>;
}
