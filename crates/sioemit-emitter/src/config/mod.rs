//! Emitter config loader (strict parsing).

pub mod schema;

use std::fs;

use sioemit_core::error::{EmitError, Result};

pub use schema::{EmitterConfig, EmitterSection, RedisSection, RedisTarget};

pub fn load_from_file(path: &str) -> Result<EmitterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| EmitError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<EmitterConfig> {
    let cfg: EmitterConfig = serde_yaml::from_str(s)
        .map_err(|e| EmitError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
