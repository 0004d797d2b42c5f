//! Port interfaces for the application layer.
//!
//! Ports define the contract between the panel runtime and the host
//! environment. The history store is the only mandatory collaborator; the
//! system clipboard, RPC channel and blob resolver are environment-dependent
//! capabilities passed in as optional trait objects rather than probed at
//! call time.

pub mod blob_resolver;
pub mod errors;
pub mod history_store;
pub mod rpc_channel;
pub mod system_clipboard;
pub mod ui_bridge;

pub use blob_resolver::{BlobResolverPort, ImageBlob};
pub use errors::{BlobError, ClipboardWriteError, RpcError, StoreError};
pub use history_store::{HistoryPage, HistoryStorePort};
pub use rpc_channel::{RpcChannelPort, RpcResponse};
pub use system_clipboard::SystemClipboardPort;
pub use ui_bridge::{NoopUiBridge, UiBridgePort};
