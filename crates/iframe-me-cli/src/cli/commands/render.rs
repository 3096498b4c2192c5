//! `iframe-me render <url>` – probe the URL and print the iframe markup.

use anyhow::{Context, Result};
use iframe_me_core::config::{IframeMeConfig, ProbeMethod};
use iframe_me_core::{EmbedAttributes, Renderer};

use super::client_for;

pub fn run_render(
    cfg: &IframeMeConfig,
    url: &str,
    class: Option<String>,
    attrs: Vec<(String, String)>,
    method: Option<ProbeMethod>,
) -> Result<()> {
    let mut attributes: EmbedAttributes = attrs.into_iter().collect();
    if let Some(class) = class {
        attributes = attributes.with_class(class);
    }

    let renderer = Renderer::new(url, attributes, client_for(cfg, method))?;
    let html = renderer
        .output()
        .with_context(|| format!("cannot embed {url}"))?;
    println!("{html}");
    Ok(())
}
