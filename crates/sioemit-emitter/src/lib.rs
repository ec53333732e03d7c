//! sioemit emitter library entry.
//!
//! Wires configuration, the pub/sub publisher, and the broadcast emitter into
//! a handle that other server processes use to reach socket.io clients
//! connected elsewhere. Consumed by the `sioemit` binary and by integration
//! tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod emitter;
pub mod obs;
pub mod transport;

pub use emitter::{Broadcast, EmitReport, Emitter};
pub use transport::{MemoryPublisher, Published, Publisher};

#[cfg(feature = "redis")]
pub use transport::RedisPublisher;
