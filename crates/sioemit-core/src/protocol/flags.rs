//! Delivery flags carried alongside a broadcast.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Recognized flag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Json,
    Volatile,
    Broadcast,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Json, Flag::Volatile, Flag::Broadcast];

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Json => "json",
            Flag::Volatile => "volatile",
            Flag::Broadcast => "broadcast",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Flag::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

/// Flag set for a single emission.
///
/// Encoded as a map of `name -> true` in the order flags were first set.
/// Unset flags are omitted, so an emission without flags encodes `{}`.
/// On decode, unknown names and `false` values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    order: Vec<Flag>,
}

impl Flags {
    pub fn set(&mut self, flag: Flag) {
        if !self.is_set(flag) {
            self.order.push(flag);
        }
    }

    pub fn is_set(&self, flag: Flag) -> bool {
        self.order.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Flags currently set, in the order they were set.
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.order.iter().copied()
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut flags = Flags::default();
        for f in iter {
            flags.set(f);
        }
        flags
    }
}

impl Serialize for Flags {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.order.len()))?;
        for f in &self.order {
            map.serialize_entry(f.as_str(), &true)?;
        }
        map.end()
    }
}

struct FlagsVisitor;

impl<'de> Visitor<'de> for FlagsVisitor {
    type Value = Flags;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of flag names to booleans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Flags, A::Error> {
        let mut flags = Flags::default();
        while let Some(name) = map.next_key::<String>()? {
            match Flag::parse(&name) {
                Some(flag) => {
                    if map.next_value::<bool>()? {
                        flags.set(flag);
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(flags)
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_map(FlagsVisitor)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn set_is_idempotent() {
        let mut f = Flags::default();
        assert!(f.is_empty());
        f.set(Flag::Volatile);
        f.set(Flag::Volatile);
        assert!(f.is_set(Flag::Volatile));
        assert_eq!(f.iter().collect::<Vec<_>>(), vec![Flag::Volatile]);
    }

    #[test]
    fn encode_follows_set_order() {
        let f: Flags = [Flag::Volatile, Flag::Json].into_iter().collect();
        let s = serde_json::to_string(&f).unwrap();
        assert_eq!(s, r#"{"volatile":true,"json":true}"#);
        assert_eq!(serde_json::to_string(&Flags::default()).unwrap(), "{}");
    }

    #[test]
    fn decode_ignores_unknown_and_false() {
        let f: Flags =
            serde_json::from_str(r#"{"compress":{"level":1},"broadcast":false,"volatile":true}"#)
                .unwrap();
        assert!(f.is_set(Flag::Volatile));
        assert!(!f.is_set(Flag::Broadcast));
        assert!(!f.is_set(Flag::Json));
    }

    #[test]
    fn parse_known_names() {
        assert_eq!(Flag::parse("json"), Some(Flag::Json));
        assert_eq!(Flag::parse("local"), None);
    }
}
