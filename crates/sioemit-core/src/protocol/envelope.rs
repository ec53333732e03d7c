//! Wire envelope: MessagePack `[sender_id, packet, options]`.
//!
//! Structs are encoded as maps keyed by field name so subscribers written in
//! other languages read `packet.type`, `packet.data`, `options.rooms`, etc.

use bytes::Bytes;

use crate::error::Result;

use super::options::BroadcastOptions;
use super::packet::Packet;

/// Sender id shared by every emitter. Subscribers use it to tell relayed
/// events apart from those published by an adapter node.
pub const EMITTER_UID: &str = "emitter";

/// One emission's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct WireEnvelope {
    pub sender_id: String,
    pub packet: Packet,
    pub options: BroadcastOptions,
}

impl WireEnvelope {
    pub fn new(packet: Packet, options: BroadcastOptions) -> Self {
        Self {
            sender_id: EMITTER_UID.to_owned(),
            packet,
            options,
        }
    }

    /// Encode once; the returned buffer is shared by every target channel.
    pub fn encode(&self) -> Result<Bytes> {
        let buf = rmp_serde::to_vec_named(&(&self.sender_id, &self.packet, &self.options))?;
        Ok(Bytes::from(buf))
    }

    /// Decode a payload produced by `encode` (or a compatible emitter).
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let (sender_id, packet, options): (String, Packet, BroadcastOptions) =
            rmp_serde::from_slice(buf)?;
        Ok(Self {
            sender_id,
            packet,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::protocol::arg::Arg;
    use crate::protocol::flags::Flag;
    use crate::protocol::options::Rooms;

    #[test]
    fn decode_reads_back_scope() {
        let mut options = BroadcastOptions {
            rooms: ["a", "b"].into_iter().collect::<Rooms>(),
            ..Default::default()
        };
        options.flags.set(Flag::Broadcast);
        let packet = Packet::event("/admin", "ev", vec![Arg::Binary(vec![1, 2, 0xff])]);
        let env = WireEnvelope::new(packet, options);

        let buf = env.encode().unwrap();
        let back = WireEnvelope::decode(&buf).unwrap();
        assert_eq!(back.sender_id, EMITTER_UID);
        assert_eq!(back.packet.nsp, "/admin");
        assert_eq!(back.packet.args(), &[Arg::Binary(vec![1, 2, 0xff])]);
        assert!(back.options.flags.is_set(Flag::Broadcast));
        assert_eq!(back.options.rooms.len(), 2);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = WireEnvelope::decode(&[0xc1]).unwrap_err();
        assert_eq!(err.code().as_str(), "DECODE");
    }
}
