//! CLI for the urlguard SSRF guard.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlguard_core::config;

use commands::{run_batch, run_check, run_config};

/// Top-level CLI for the urlguard SSRF guard.
#[derive(Debug, Parser)]
#[command(name = "urlguard")]
#[command(about = "urlguard: validate outbound gateway base URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a single gateway base URL and print its canonical form.
    ///
    /// Exit codes: 0 = accepted, 2 = invalid input, 3 = blocked address.
    Check {
        /// Candidate base URL (e.g. from a tenant settings form).
        url: String,

        /// Accept plain http:// (https is still the default scheme).
        #[arg(long)]
        allow_http: bool,

        /// Print the verdict as a JSON object instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Validate candidates read one per line from a file (or stdin).
    Batch {
        /// Path to a file of candidates; omit to read stdin.
        path: Option<PathBuf>,

        /// Accept plain http:// for every candidate.
        #[arg(long)]
        allow_http: bool,
    },

    /// Print the config file path and effective settings.
    Config,
}

impl CliCommand {
    /// Dispatches the parsed command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                url,
                allow_http,
                json,
            } => run_check(&cfg, &url, allow_http, json),
            CliCommand::Batch { path, allow_http } => {
                run_batch(&cfg, path.as_deref(), allow_http)
            }
            CliCommand::Config => run_config(&cfg),
        }
    }
}

#[cfg(test)]
mod tests;
