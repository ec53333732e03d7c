use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::broadcast;

use sioemit_core::error::Result;

use super::Publisher;

/// A message seen by the in-memory bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub channel: String,
    pub payload: Bytes,
}

/// In-process bus over `tokio::sync::broadcast`.
///
/// Messages published with no live receiver are dropped, like pub/sub.
/// Slow receivers observe `Lagged` once `capacity` is exceeded.
#[derive(Clone, Debug)]
pub struct MemoryPublisher {
    tx: broadcast::Sender<Published>,
}

impl MemoryPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Published> {
        self.tx.subscribe()
    }
}

impl Default for MemoryPublisher {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[async_trait]
impl Publisher for MemoryPublisher {
    async fn publish(&self, channel: &str, payload: Bytes) -> Result<()> {
        let _ = self.tx.send(Published {
            channel: channel.to_owned(),
            payload,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn publish_without_receivers_is_ok() {
        let bus = MemoryPublisher::new(4);
        assert!(bus.publish("c#", Bytes::from_static(b"x")).await.is_ok());
    }

    #[tokio::test]
    async fn receivers_see_messages_in_order() {
        let bus = MemoryPublisher::new(4);
        let mut rx = bus.subscribe();
        bus.publish("a#", Bytes::from_static(b"1")).await.unwrap();
        bus.publish("b#", Bytes::from_static(b"2")).await.unwrap();
        assert_eq!(rx.recv().await.unwrap().channel, "a#");
        assert_eq!(rx.recv().await.unwrap().channel, "b#");
    }
}
