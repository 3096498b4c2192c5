//! Renderer: validate on construction, check reachability, then build markup.

use crate::error::{ConfigurationError, RenderError, RequestError};
use crate::http::HttpClient;
use crate::markup::{self, EmbedAttributes};
use crate::reachability::{self, Reachability};

/// One embed request. Construct, call [`output`](Self::output), discard.
///
/// Holds no state between calls; every `output()` probes the URL again.
#[derive(Debug, Clone)]
pub struct Renderer<C> {
    url: String,
    attributes: EmbedAttributes,
    client: C,
}

impl<C: HttpClient> Renderer<C> {
    /// Fails with [`ConfigurationError::EmptyUrl`] for `""`. Any other string is
    /// accepted as-is, relative or not; nothing is fetched here.
    pub fn new(
        url: impl Into<String>,
        attributes: impl Into<EmbedAttributes>,
        client: C,
    ) -> Result<Self, ConfigurationError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ConfigurationError::EmptyUrl);
        }
        let attributes = attributes.into();
        tracing::debug!(url = url.as_str(), ?attributes, "renderer created");
        Ok(Self {
            url,
            attributes,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn attributes(&self) -> &EmbedAttributes {
        &self.attributes
    }

    /// Merged class value, before escaping.
    pub fn class(&self) -> String {
        markup::merge_class(self.attributes.custom_classes())
    }

    /// Probe the target once with the injected client.
    pub fn check(&self) -> Reachability {
        reachability::check(&self.client, &self.url)
    }

    /// Build markup for an already classified probe; failures map to [`RequestError`].
    pub fn render(&self, reachability: &Reachability) -> Result<String, RequestError> {
        reachability.clone().into_result()?;
        Ok(markup::build_markup(&self.url, &self.attributes))
    }

    /// Check reachability, then return the iframe markup. Blocks on the probe.
    pub fn output(&self) -> Result<String, RequestError> {
        let reachability = self.check();
        self.render(&reachability)
    }
}

/// Construct and render in one call.
pub fn render<C: HttpClient>(
    url: impl Into<String>,
    attributes: impl Into<EmbedAttributes>,
    client: C,
) -> Result<String, RenderError> {
    Ok(Renderer::new(url, attributes, client)?.output()?)
}
