//! Reachability check: one request, classified into a typed result.
//!
//! Kept separate from markup so rendering can be tested without a network and
//! so a caller can cache or reuse a [`Reachability`] without touching escaping.

use crate::error::RequestError;
use crate::http::HttpClient;

/// Classification of a single probe of the target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    /// Any status outside 400..=599, including a missing one.
    Reachable { status: Option<u32> },
    /// 400..=499.
    ClientError(u32),
    /// 500..=599.
    ServerError(u32),
    /// The client returned an error instead of a response.
    TransportFailure(String),
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Reachable { .. })
    }

    /// Map to the error raised by `output()`; `Ok` only for [`Reachability::Reachable`].
    pub fn into_result(self) -> Result<(), RequestError> {
        match self {
            Reachability::Reachable { .. } => Ok(()),
            Reachability::ClientError(code) => Err(RequestError::ClientStatus(code)),
            Reachability::ServerError(code) => Err(RequestError::ServerStatus(code)),
            Reachability::TransportFailure(msg) => Err(RequestError::Transport(msg)),
        }
    }
}

/// Classify a response status.
pub fn classify_status(status: Option<u32>) -> Reachability {
    match status {
        Some(code @ 400..=499) => Reachability::ClientError(code),
        Some(code @ 500..=599) => Reachability::ServerError(code),
        _ => Reachability::Reachable { status },
    }
}

/// Issue exactly one request to `url` and classify the outcome. Never retries.
pub fn check<C: HttpClient + ?Sized>(client: &C, url: &str) -> Reachability {
    let result = match client.fetch(url) {
        Ok(response) => classify_status(response.status),
        Err(e) => Reachability::TransportFailure(e.to_string()),
    };
    match &result {
        Reachability::Reachable { status } => {
            tracing::debug!(url, ?status, "target reachable");
        }
        failure => tracing::warn!(url, ?failure, "target not reachable"),
    }
    result
}
