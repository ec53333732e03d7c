//! Top-level facade crate for sioemit.
//!
//! Re-exports the wire contract and the emitter so users can depend on a single crate.

pub mod core {
    pub use sioemit_core::*;
}

pub mod emitter {
    pub use sioemit_emitter::*;
}

pub use sioemit_emitter::{Broadcast, EmitReport, Emitter};
