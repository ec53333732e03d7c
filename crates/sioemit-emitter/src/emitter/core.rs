use std::sync::Arc;

use serde_json::Value;

use sioemit_core::error::Result;
use sioemit_core::protocol::{
    Arg, BroadcastOptions, ChannelNamer, EmptyRoomsPolicy, Flag, Packet, WireEnvelope,
    DEFAULT_NAMESPACE,
};

use crate::config::EmitterConfig;
use crate::obs::EmitterMetrics;
use crate::transport::Publisher;

use super::broadcast::{Broadcast, EmitReport};

/// Namespace-scoped broadcast handle.
///
/// Cheap to clone. Derived emitters (`of`) share the publisher, prefix,
/// policy and metrics.
#[derive(Clone)]
pub struct Emitter {
    publisher: Arc<dyn Publisher>,
    prefix: Arc<str>,
    nsp: Arc<str>,
    namer: ChannelNamer,
    empty_rooms: EmptyRoomsPolicy,
    metrics: Arc<EmitterMetrics>,
}

impl Emitter {
    /// Root-namespace emitter publishing under `prefix`.
    pub fn new(publisher: Arc<dyn Publisher>, prefix: impl Into<Arc<str>>) -> Self {
        let prefix = prefix.into();
        Self {
            namer: ChannelNamer::new(&prefix, DEFAULT_NAMESPACE),
            publisher,
            prefix,
            nsp: Arc::from(DEFAULT_NAMESPACE),
            empty_rooms: EmptyRoomsPolicy::default(),
            metrics: Arc::new(EmitterMetrics::new()),
        }
    }

    /// Build from validated config over an existing publisher.
    pub fn from_config(cfg: &EmitterConfig, publisher: Arc<dyn Publisher>) -> Self {
        Self::new(publisher, cfg.emitter.key.as_str()).with_empty_rooms(cfg.emitter.empty_rooms)
    }

    /// Resolve the redis target, connect, and build the root emitter.
    /// Fails if the target is incomplete.
    #[cfg(feature = "redis")]
    pub async fn connect(cfg: &EmitterConfig) -> Result<Self> {
        let target = cfg.redis.target()?;
        let publisher = crate::transport::RedisPublisher::connect(&target).await?;
        Ok(Self::from_config(cfg, Arc::new(publisher)))
    }

    pub fn with_empty_rooms(mut self, policy: EmptyRoomsPolicy) -> Self {
        self.empty_rooms = policy;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<EmitterMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Emitter for another namespace. The receiver is left untouched.
    pub fn of(&self, nsp: &str) -> Emitter {
        Emitter {
            publisher: Arc::clone(&self.publisher),
            prefix: Arc::clone(&self.prefix),
            nsp: Arc::from(nsp),
            namer: ChannelNamer::new(&self.prefix, nsp),
            empty_rooms: self.empty_rooms,
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn namespace(&self) -> &str {
        &self.nsp
    }

    /// `{prefix}#{namespace}#`.
    pub fn channel_base(&self) -> &str {
        self.namer.base()
    }

    pub fn empty_rooms(&self) -> EmptyRoomsPolicy {
        self.empty_rooms
    }

    pub fn metrics(&self) -> &Arc<EmitterMetrics> {
        &self.metrics
    }

    /// Start an empty broadcast on this emitter.
    pub fn scope(&self) -> Broadcast<'_> {
        Broadcast::new(self)
    }

    pub fn to(&self, room: impl Into<String>) -> Broadcast<'_> {
        self.scope().to(room)
    }

    pub fn in_room(&self, room: impl Into<String>) -> Broadcast<'_> {
        self.scope().in_room(room)
    }

    pub fn to_all<I, S>(&self, rooms: I) -> Broadcast<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope().to_all(rooms)
    }

    pub fn in_rooms<I, S>(&self, rooms: I) -> Broadcast<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope().in_rooms(rooms)
    }

    pub fn to_value(&self, rooms: &Value) -> Broadcast<'_> {
        self.scope().to_value(rooms)
    }

    pub fn flag(&self, flag: Flag) -> Broadcast<'_> {
        self.scope().flag(flag)
    }

    pub fn json(&self) -> Broadcast<'_> {
        self.scope().json()
    }

    pub fn volatile(&self) -> Broadcast<'_> {
        self.scope().volatile()
    }

    pub fn broadcast(&self) -> Broadcast<'_> {
        self.scope().broadcast()
    }

    /// Emit with no rooms or flags; channels follow the empty-rooms policy.
    pub async fn emit(&self, event: impl Into<String>, args: Vec<Arg>) -> Result<EmitReport> {
        self.scope().emit(event, args).await
    }

    /// Encode once, then publish the same bytes to every target channel in
    /// room order. A failing channel does not stop the remaining ones; the
    /// first transport error is returned once every channel was attempted.
    pub(super) async fn dispatch(
        &self,
        packet: Packet,
        options: BroadcastOptions,
    ) -> Result<EmitReport> {
        let nsp: &str = &self.nsp;
        let targets = self.namer.targets(&options.rooms, self.empty_rooms);
        let payload = WireEnvelope::new(packet, options).encode()?;
        self.metrics.emit_total.inc(&[("nsp", nsp)]);

        if targets.is_empty() {
            tracing::debug!(nsp = %nsp, "emit without rooms published nothing");
        }

        let mut channels = Vec::with_capacity(targets.len());
        let mut first_err = None;
        for channel in targets {
            tracing::debug!(channel = %channel, "publishing message to channel");
            match self.publisher.publish(&channel, payload.clone()).await {
                Ok(()) => {
                    self.metrics.publish_total.inc(&[("nsp", nsp)]);
                    channels.push(channel);
                }
                Err(e) => {
                    self.metrics.publish_fail_total.inc(&[("nsp", nsp)]);
                    tracing::warn!(channel = %channel, error = %e, "publish failed");
                    first_err.get_or_insert(e);
                }
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(EmitReport { channels, payload }),
        }
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("prefix", &self.prefix)
            .field("nsp", &self.nsp)
            .field("empty_rooms", &self.empty_rooms)
            .finish_non_exhaustive()
    }
}
