use async_trait::async_trait;
use bytes::Bytes;

use sioemit_core::error::Result;

/// Publish capability. Fire-and-forget: `Ok` means the transport accepted
/// the message, not that any subscriber received it.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, channel: &str, payload: Bytes) -> Result<()>;
}
