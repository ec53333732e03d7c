use serde::Deserialize;
use sioemit_core::error::{EmitError, Result};
use sioemit_core::protocol::{EmptyRoomsPolicy, DEFAULT_PREFIX};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitterConfig {
    pub version: u32,

    #[serde(default)]
    pub emitter: EmitterSection,

    #[serde(default)]
    pub redis: RedisSection,
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(EmitError::UnsupportedVersion);
        }

        self.emitter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitterSection {
    /// Channel prefix.
    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default)]
    pub empty_rooms: EmptyRoomsPolicy,
}

impl Default for EmitterSection {
    fn default() -> Self {
        Self {
            key: default_key(),
            empty_rooms: EmptyRoomsPolicy::default(),
        }
    }
}

impl EmitterSection {
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(EmitError::Config("emitter.key must not be empty".into()));
        }
        Ok(())
    }
}

fn default_key() -> String {
    DEFAULT_PREFIX.into()
}

/// Redis connection target: `url`, `socket`, or both `host` and `port`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedisSection {
    /// Full connection URI, e.g. `redis://:pass@10.0.0.5:6379/2`.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub socket: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl RedisSection {
    /// Resolve the connection target. Precedence: url, socket, host/port.
    pub fn target(&self) -> Result<RedisTarget> {
        if let Some(url) = &self.url {
            if url.is_empty() {
                return Err(EmitError::Config("redis.url must not be empty".into()));
            }
            return Ok(RedisTarget::Url(url.clone()));
        }
        if let Some(path) = &self.socket {
            return Ok(RedisTarget::Socket(path.clone()));
        }
        let host = self.host.clone().ok_or(EmitError::MissingTarget("host"))?;
        let port = self.port.ok_or(EmitError::MissingTarget("port"))?;
        Ok(RedisTarget::Tcp { host, port })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedisTarget {
    Url(String),
    Socket(String),
    Tcp { host: String, port: u16 },
}

impl RedisTarget {
    pub fn url(&self) -> String {
        match self {
            RedisTarget::Url(url) => url.clone(),
            RedisTarget::Socket(path) => format!("redis+unix://{path}"),
            RedisTarget::Tcp { host, port } => format!("redis://{host}:{port}/"),
        }
    }

    /// `url()` with any `user:password@` part removed, for logs and errors.
    pub fn redacted_url(&self) -> String {
        let url = self.url();
        match url.split_once("://") {
            Some((scheme, rest)) => match rest.rsplit_once('@') {
                Some((_, addr)) => format!("{scheme}://{addr}"),
                None => url,
            },
            None => url,
        }
    }
}
