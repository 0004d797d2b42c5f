use serde::Deserialize;
use serde_json::Value;

use super::errors::RpcError;

/// Structured response from the host channel. Commands that answer with
/// nothing deserialize into the successful default.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl Default for RpcResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

/// Generic command channel to the host application, used as the fallback
/// transport for apply-to-active-app and for hiding the panel window.
/// Absence of the channel is a normal, handled condition.
#[async_trait::async_trait]
pub trait RpcChannelPort: Send + Sync {
    async fn send(&self, command: &str, payload: Option<Value>) -> Result<RpcResponse, RpcError>;
}
