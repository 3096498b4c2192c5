//! libcurl-backed [`HttpClient`] (blocking, one easy handle per request).

use super::{HttpClient, HttpResponse, TransportError};
use crate::config::{ProbeConfig, ProbeMethod};

/// Default HTTP client: HEAD (or GET) via libcurl, settings from [`ProbeConfig`].
#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    probe: ProbeConfig,
}

impl CurlClient {
    pub fn new(probe: ProbeConfig) -> Self {
        Self { probe }
    }

    fn perform(&self, url: &str) -> Result<u32, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        match self.probe.method {
            ProbeMethod::Head => easy.nobody(true)?,
            ProbeMethod::Get => easy.get(true)?,
        }
        easy.follow_location(self.probe.follow_redirects)?;
        easy.connect_timeout(self.probe.connect_timeout())?;
        easy.timeout(self.probe.timeout())?;
        if let Some(ua) = &self.probe.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            // Body is irrelevant; drain it so GET probes complete.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        easy.response_code()
    }
}

impl HttpClient for CurlClient {
    fn fetch(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let code = self.perform(url)?;
        tracing::debug!(url, code, method = ?self.probe.method, "probe response");
        // libcurl reports 0 when no status line was received (e.g. file://).
        let status = if code == 0 { None } else { Some(code) };
        Ok(HttpResponse { status })
    }
}
