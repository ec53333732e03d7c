//! sioemit core: the cross-process broadcast wire contract.
//!
//! This crate defines how an event and its delivery scope (namespace, rooms,
//! flags) become a MessagePack payload and a set of pub/sub channel names that
//! any subscriber following the socket.io channel convention can decode. It
//! carries no transport or runtime dependencies so subscriber-side tooling can
//! reuse it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `EmitError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{EmitError, Result};
