//! Shared error type across sioemit crates.

use thiserror::Error;

/// Stable error codes (used in logs and CLI exit output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration.
    Config,
    /// Transport connection target not specified.
    MissingTarget,
    /// Envelope could not be encoded.
    Encode,
    /// Payload could not be decoded.
    Decode,
    /// Publish or connect failed in the transport.
    Transport,
    /// Unsupported config version.
    UnsupportedVersion,
}

impl ErrorCode {
    /// String representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::MissingTarget => "MISSING_TARGET",
            ErrorCode::Encode => "ENCODE",
            ErrorCode::Decode => "DECODE",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Unified error type used by core and emitter.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("missing redis `{0}`")]
    MissingTarget(&'static str),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl EmitError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            EmitError::Config(_) => ErrorCode::Config,
            EmitError::MissingTarget(_) => ErrorCode::MissingTarget,
            EmitError::Encode(_) => ErrorCode::Encode,
            EmitError::Decode(_) => ErrorCode::Decode,
            EmitError::Transport(_) => ErrorCode::Transport,
            EmitError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
        }
    }
}

impl From<rmp_serde::encode::Error> for EmitError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        EmitError::Encode(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for EmitError {
    fn from(e: rmp_serde::decode::Error) -> Self {
        EmitError::Decode(e.to_string())
    }
}
