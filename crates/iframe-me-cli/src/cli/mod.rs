//! CLI for rendering iframe embeds.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use iframe_me_core::config::{self, ProbeMethod};

use commands::{run_check, run_completions, run_man, run_render};

/// Top-level CLI for iframe-me.
#[derive(Debug, Parser)]
#[command(name = "iframe-me")]
#[command(about = "iframe-me: render iframe embeds for reachable URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Probe method override (defaults to `[probe] method` in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Head,
    Get,
}

impl From<MethodArg> for ProbeMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Head => ProbeMethod::Head,
            MethodArg::Get => ProbeMethod::Get,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that a URL is reachable and print its iframe markup.
    Render {
        /// Target URL to embed.
        url: String,
        /// Extra classes appended after the default `iframe-me` class.
        #[arg(long)]
        class: Option<String>,
        /// Additional attribute, repeatable (e.g. --attr height=480).
        #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
        /// Probe with HEAD or GET.
        #[arg(long, value_enum)]
        method: Option<MethodArg>,
    },

    /// Probe a URL and print how it was classified.
    Check {
        /// Target URL to probe.
        url: String,
        /// Probe with HEAD or GET.
        #[arg(long, value_enum)]
        method: Option<MethodArg>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print a man page (roff).
    Man,
}

/// Parse `name=value`; the value may be empty or contain further `=`.
fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty attribute name in `{s}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Render {
                url,
                class,
                attrs,
                method,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_render(&cfg, &url, class, attrs, method.map(Into::into))?;
            }
            CliCommand::Check { url, method } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_check(&cfg, &url, method.map(Into::into))?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
