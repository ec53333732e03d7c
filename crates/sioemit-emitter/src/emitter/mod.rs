//! Broadcast emitter.
//!
//! `Emitter` is the long-lived, namespace-scoped handle. Room and flag
//! selection happens on a `Broadcast`, which `emit` consumes, so every
//! emission starts from an empty scope.

mod broadcast;
mod core;

pub use self::broadcast::{Broadcast, EmitReport};
pub use self::core::Emitter;
