use bytes::Bytes;
use serde_json::Value;

use sioemit_core::error::Result;
use sioemit_core::protocol::{Arg, BroadcastOptions, Flag, Packet};

use super::core::Emitter;

/// Pending emission: the rooms and flags selected so far.
///
/// Consumed by `emit`, so selections never carry over into the next
/// emission and concurrent chains on one `Emitter` cannot interleave.
#[must_use = "a broadcast publishes nothing until `emit` is called"]
#[derive(Debug, Clone)]
pub struct Broadcast<'a> {
    emitter: &'a Emitter,
    options: BroadcastOptions,
}

/// Outcome of one emission.
#[derive(Debug, Clone)]
pub struct EmitReport {
    /// Channels published to, in room order.
    pub channels: Vec<String>,
    /// The encoded envelope, identical for every channel.
    pub payload: Bytes,
}

impl<'a> Broadcast<'a> {
    pub(super) fn new(emitter: &'a Emitter) -> Self {
        Self {
            emitter,
            options: BroadcastOptions::default(),
        }
    }

    /// Target a room. Repeated rooms are kept once.
    pub fn to(mut self, room: impl Into<String>) -> Self {
        self.options.rooms.insert(room);
        self
    }

    /// Alias of `to`.
    pub fn in_room(self, room: impl Into<String>) -> Self {
        self.to(room)
    }

    /// Target several rooms, in order.
    pub fn to_all<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.rooms.extend(rooms);
        self
    }

    /// Alias of `to_all`.
    pub fn in_rooms<I, S>(self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to_all(rooms)
    }

    /// Target rooms given as JSON: a string or an array of strings.
    /// Other values are ignored.
    pub fn to_value(mut self, rooms: &Value) -> Self {
        self.options.rooms.insert_value(rooms);
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        tracing::debug!(flag = flag.as_str(), "flag on");
        self.options.flags.set(flag);
        self
    }

    pub fn json(self) -> Self {
        self.flag(Flag::Json)
    }

    pub fn volatile(self) -> Self {
        self.flag(Flag::Volatile)
    }

    pub fn broadcast(self) -> Self {
        self.flag(Flag::Broadcast)
    }

    /// Scope accumulated so far.
    pub fn options(&self) -> &BroadcastOptions {
        &self.options
    }

    /// Publish `[event, ...args]` to every selected room.
    pub async fn emit(self, event: impl Into<String>, args: Vec<Arg>) -> Result<EmitReport> {
        let Broadcast { emitter, options } = self;
        let packet = Packet::event(emitter.namespace(), event, args);
        emitter.dispatch(packet, options).await
    }
}
