use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("store rejected the request: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ClipboardWriteError {
    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("this environment cannot write images to the clipboard")]
    ImageUnsupported,
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("channel send failed: {0}")]
    Send(String),
}

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("cannot resolve image content")]
    EmptyContent,

    #[error("failed to read image data ({0})")]
    Fetch(String),
}
