//! Pub/sub transport seam.
//!
//! The emitter only needs `publish(channel, payload)`. Connection handling,
//! reconnects, and clustering stay inside the backing client.

mod memory;
mod publisher;
#[cfg(feature = "redis")]
mod redis;

pub use memory::{MemoryPublisher, Published};
pub use publisher::Publisher;
#[cfg(feature = "redis")]
pub use self::redis::RedisPublisher;
