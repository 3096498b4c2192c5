//! Error taxonomy for rendering: construction errors and reachability errors.
//!
//! Both kinds are terminal. Callers decide what to show instead of the embed.

use thiserror::Error;

/// Structurally invalid construction input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("empty target URL")]
    EmptyUrl,
}

/// The reachability check failed; no markup is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The client returned no response at all (DNS, connect, TLS, timeout...).
    #[error("transport failure reaching target URL: {0}")]
    Transport(String),
    /// Response status in 400..=499.
    #[error("target URL returned client error status {0}")]
    ClientStatus(u32),
    /// Response status in 500..=599.
    #[error("target URL returned server error status {0}")]
    ServerStatus(u32),
}

/// Either failure, for callers that construct and render in one go.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Request(#[from] RequestError),
}
