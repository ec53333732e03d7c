//! Broadcast wire contract.
//!
//! - `packet`: the logical socket.io event packet (`type`, `data`, `nsp`).
//! - `arg`: MessagePack argument values (binary stays `bin`).
//! - `flags` / `options`: per-emission delivery scope (rooms + flags).
//! - `envelope`: MessagePack `[sender_id, packet, options]`, encoded once per
//!   emission and published unmodified to every target channel.
//! - `channel`: `{prefix}#{namespace}#{room}#` channel naming.
//!
//! Field names and channel delimiters are shared with independent subscriber
//! implementations and must not change.

pub mod arg;
pub mod channel;
pub mod envelope;
pub mod flags;
pub mod options;
pub mod packet;

pub use arg::{from_json, Arg};
pub use channel::{ChannelNamer, EmptyRoomsPolicy, DEFAULT_NAMESPACE, DEFAULT_PREFIX};
pub use envelope::{WireEnvelope, EMITTER_UID};
pub use flags::{Flag, Flags};
pub use options::{BroadcastOptions, Rooms};
pub use packet::{Packet, PacketType};
