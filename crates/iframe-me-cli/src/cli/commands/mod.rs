//! CLI command handlers, one per file.

mod check;
mod completions;
mod render;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use render::run_render;

use iframe_me_core::config::{IframeMeConfig, ProbeMethod};
use iframe_me_core::CurlClient;

/// Curl client from config, with the command-line method override applied.
fn client_for(cfg: &IframeMeConfig, method: Option<ProbeMethod>) -> CurlClient {
    let mut probe = cfg.probe.clone();
    if let Some(m) = method {
        probe.method = m;
    }
    CurlClient::new(probe)
}
