//! HTTP client seam used by the reachability check.
//!
//! The renderer only needs "request this URL once, tell me the status or why
//! there was no response". Timeouts, redirects and pooling belong to the
//! implementation; [`CurlClient`] is the default one.

mod curl_client;

pub use curl_client::CurlClient;

use thiserror::Error;

/// Outcome of a request that produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HttpResponse {
    /// Status code, or `None` when the response carried no usable status.
    pub status: Option<u32>,
}

impl HttpResponse {
    pub fn with_status(code: u32) -> Self {
        Self { status: Some(code) }
    }
}

/// No response was obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("{0}")]
    Other(String),
}

/// A single-call HTTP capability: one request per `fetch`, no retries.
pub trait HttpClient {
    fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).fetch(url)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).fetch(url)
    }
}
