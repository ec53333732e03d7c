use async_trait::async_trait;
use bytes::Bytes;
use ::redis::aio::MultiplexedConnection;
use ::redis::AsyncCommands;

use sioemit_core::error::{EmitError, Result};

use crate::config::RedisTarget;

use super::Publisher;

/// Redis `PUBLISH` over a multiplexed connection.
#[derive(Clone)]
pub struct RedisPublisher {
    conn: MultiplexedConnection,
}

impl RedisPublisher {
    pub async fn connect(target: &RedisTarget) -> Result<Self> {
        let shown = target.redacted_url();
        let client = ::redis::Client::open(target.url().as_str())
            .map_err(|e| EmitError::Transport(format!("redis client ({shown}): {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| EmitError::Transport(format!("redis connect ({shown}): {e}")))?;
        tracing::info!(url = %shown, "redis publisher connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl Publisher for RedisPublisher {
    async fn publish(&self, channel: &str, payload: Bytes) -> Result<()> {
        // MultiplexedConnection is a cheap handle; clone per call for &mut.
        let mut conn = self.conn.clone();
        let receivers: i64 = conn
            .publish(channel, &payload[..])
            .await
            .map_err(|e| EmitError::Transport(format!("redis publish: {e}")))?;
        tracing::trace!(channel, receivers, "redis publish");
        Ok(())
    }
}
