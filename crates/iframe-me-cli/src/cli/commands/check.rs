//! `iframe-me check <url>` – probe only, print the classification.

use anyhow::{Context, Result};
use iframe_me_core::config::{IframeMeConfig, ProbeMethod};
use iframe_me_core::{reachability, Reachability};

use super::client_for;

fn describe(r: &Reachability) -> String {
    match r {
        Reachability::Reachable { status: Some(code) } => format!("reachable (HTTP {code})"),
        Reachability::Reachable { status: None } => "reachable (no status)".to_string(),
        Reachability::ClientError(code) => format!("client error (HTTP {code})"),
        Reachability::ServerError(code) => format!("server error (HTTP {code})"),
        Reachability::TransportFailure(msg) => format!("transport failure: {msg}"),
    }
}

pub fn run_check(cfg: &IframeMeConfig, url: &str, method: Option<ProbeMethod>) -> Result<()> {
    anyhow::ensure!(!url.is_empty(), iframe_me_core::ConfigurationError::EmptyUrl);
    let client = client_for(cfg, method);
    let result = reachability::check(&client, url);
    println!("{url}: {}", describe(&result));
    result
        .into_result()
        .with_context(|| format!("{url} is not embeddable"))
}
