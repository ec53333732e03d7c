//! Broadcast options: the room/flag snapshot taken at emission time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::flags::Flags;

/// Ordered, deduplicated room list. Insertion order drives publish order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rooms(Vec<String>);

impl Rooms {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append `room` unless already present. Returns true if it was added.
    pub fn insert(&mut self, room: impl Into<String>) -> bool {
        let room = room.into();
        if self.contains(&room) {
            return false;
        }
        tracing::debug!(room = %room, "room");
        self.0.push(room);
        true
    }

    /// Append each room in order, skipping duplicates.
    pub fn extend<I, S>(&mut self, rooms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for r in rooms {
            self.insert(r);
        }
    }

    /// Append rooms from a dynamic value: a string, or an array whose string
    /// elements are rooms. Anything else is ignored. Returns how many rooms
    /// were added.
    pub fn insert_value(&mut self, value: &Value) -> usize {
        match value {
            Value::String(s) => usize::from(self.insert(s.as_str())),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| self.insert(*s))
                .count(),
            _ => 0,
        }
    }

    pub fn contains(&self, room: &str) -> bool {
        self.0.iter().any(|r| r == room)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Rooms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut rooms = Rooms::new();
        rooms.extend(iter);
        rooms
    }
}

/// Delivery scope sent next to the packet so subscribers apply the same
/// semantics locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastOptions {
    #[serde(default)]
    pub rooms: Rooms,
    #[serde(default)]
    pub flags: Flags,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn insert_dedups_and_keeps_order() {
        let mut r = Rooms::new();
        assert!(r.insert("b"));
        assert!(r.insert("a"));
        assert!(!r.insert("b"));
        assert_eq!(r.as_slice(), &["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn insert_value_accepts_string_and_array() {
        let mut r = Rooms::new();
        assert_eq!(r.insert_value(&json!("x")), 1);
        assert_eq!(r.insert_value(&json!(["x", "y", 3, "z"])), 2);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    #[test]
    fn insert_value_ignores_other_types() {
        let mut r: Rooms = ["keep"].into_iter().collect();
        for v in [json!(42), json!(null), json!({"room": "a"}), json!(true)] {
            assert_eq!(r.insert_value(&v), 0);
        }
        assert_eq!(r.len(), 1);
    }
}
