//! socket.io event packet.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::arg::Arg;

/// Packet type discriminant, encoded as a single unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketType {
    Connect = 0,
    Disconnect = 1,
    Event = 2,
    Ack = 3,
    ConnectError = 4,
    BinaryEvent = 5,
    BinaryAck = 6,
}

impl PacketType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(PacketType::Connect),
            1 => Some(PacketType::Disconnect),
            2 => Some(PacketType::Event),
            3 => Some(PacketType::Ack),
            4 => Some(PacketType::ConnectError),
            5 => Some(PacketType::BinaryEvent),
            6 => Some(PacketType::BinaryAck),
            _ => None,
        }
    }
}

impl Serialize for PacketType {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for PacketType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let v = u8::deserialize(d)?;
        PacketType::from_u8(v).ok_or_else(|| de::Error::custom(format!("unknown packet type: {v}")))
    }
}

/// Logical event packet. Field order matches the socket.io parser layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Packet kind (field name is `type` on the wire).
    #[serde(rename = "type")]
    pub kind: PacketType,
    /// Event name followed by the payload arguments, verbatim.
    pub data: Vec<Arg>,
    /// Namespace the event belongs to.
    pub nsp: String,
}

impl Packet {
    /// Build an EVENT packet: `data = [event, ...args]`.
    pub fn event(nsp: &str, event: impl Into<String>, args: Vec<Arg>) -> Self {
        let mut data = Vec::with_capacity(args.len() + 1);
        data.push(Arg::from(event.into()));
        data.extend(args);
        Self {
            kind: PacketType::Event,
            data,
            nsp: nsp.to_owned(),
        }
    }

    /// Event name, if `data[0]` is a string.
    pub fn event_name(&self) -> Option<&str> {
        self.data.first().and_then(Arg::as_str)
    }

    /// Arguments after the event name.
    pub fn args(&self) -> &[Arg] {
        self.data.get(1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn event_keeps_argument_order() {
        let args = vec![Arg::from(1u64), Arg::from("two"), Arg::Binary(vec![0xde, 0xad])];
        let p = Packet::event("/chat", "msg", args.clone());
        assert_eq!(p.kind, PacketType::Event);
        assert_eq!(p.nsp, "/chat");
        assert_eq!(p.event_name(), Some("msg"));
        assert_eq!(p.args(), args.as_slice());
    }

    #[test]
    fn event_without_args() {
        let p = Packet::event("/", "ping", Vec::new());
        assert_eq!(p.data, vec![Arg::from("ping")]);
        assert!(p.args().is_empty());
    }

    #[test]
    fn packet_type_table() {
        assert_eq!(PacketType::Event as u8, 2);
        assert_eq!(PacketType::from_u8(5), Some(PacketType::BinaryEvent));
        assert_eq!(PacketType::from_u8(7), None);
    }
}
