//! Channel naming: `{prefix}#{namespace}#{room}#`.

use serde::Deserialize;

use super::options::Rooms;

/// Default channel prefix.
pub const DEFAULT_PREFIX: &str = "socket.io";
/// Root namespace.
pub const DEFAULT_NAMESPACE: &str = "/";

/// What to publish when an emission carries no rooms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRoomsPolicy {
    /// Publish nothing.
    #[default]
    Skip,
    /// Publish once to the namespace channel `{prefix}#{namespace}#`.
    Namespace,
}

/// Derives channel names for one `(prefix, namespace)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelNamer {
    base: String,
}

impl ChannelNamer {
    pub fn new(prefix: &str, nsp: &str) -> Self {
        Self {
            base: format!("{prefix}#{nsp}#"),
        }
    }

    /// `{prefix}#{namespace}#`; also the namespace-wide channel.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn room(&self, room: &str) -> String {
        format!("{}{room}#", self.base)
    }

    /// Target channels for an emission, in room insertion order.
    pub fn targets(&self, rooms: &Rooms, policy: EmptyRoomsPolicy) -> Vec<String> {
        if rooms.is_empty() {
            return match policy {
                EmptyRoomsPolicy::Skip => Vec::new(),
                EmptyRoomsPolicy::Namespace => vec![self.base.clone()],
            };
        }
        rooms.iter().map(|r| self.room(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_room_channel() {
        let n = ChannelNamer::new(DEFAULT_PREFIX, DEFAULT_NAMESPACE);
        assert_eq!(n.base(), "socket.io#/#");
        assert_eq!(n.room("lobby"), "socket.io#/#lobby#");
    }

    #[test]
    fn custom_prefix_and_namespace() {
        let n = ChannelNamer::new("app", "/chat");
        assert_eq!(n.room("r1"), "app#/chat#r1#");
    }

    #[test]
    fn targets_follow_room_order() {
        let n = ChannelNamer::new("p", "/");
        let rooms: Rooms = ["b", "a"].into_iter().collect();
        assert_eq!(
            n.targets(&rooms, EmptyRoomsPolicy::Skip),
            vec!["p#/#b#".to_string(), "p#/#a#".to_string()]
        );
    }

    #[test]
    fn empty_rooms_policy() {
        let n = ChannelNamer::new("p", "/x");
        assert!(n.targets(&Rooms::new(), EmptyRoomsPolicy::Skip).is_empty());
        assert_eq!(
            n.targets(&Rooms::new(), EmptyRoomsPolicy::Namespace),
            vec!["p#/x#".to_string()]
        );
    }
}
