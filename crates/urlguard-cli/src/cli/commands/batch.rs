//! Batch command: validate candidates read one per line.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use urlguard_core::config::GuardConfig;
use urlguard_core::outbound_url::OutboundUrlError;

use super::{check_candidate, EXIT_BLOCKED, EXIT_INVALID};

/// Validate every non-empty, non-`#` line from `path` (or stdin when absent).
///
/// Prints one verdict per line and a summary. Exit code: 0 when every
/// candidate was accepted, 3 when at least one was blocked, otherwise 2.
pub fn run_batch(cfg: &GuardConfig, path: Option<&Path>, allow_http: bool) -> Result<i32> {
    let input = read_input(path)?;
    let allow_http = allow_http || cfg.allow_http;

    let mut accepted = 0usize;
    let mut invalid = 0usize;
    let mut blocked = 0usize;

    for line in input.lines() {
        let candidate = line.trim();
        if candidate.is_empty() || candidate.starts_with('#') {
            continue;
        }

        match check_candidate(cfg, candidate, allow_http) {
            Ok(canonical) => {
                accepted += 1;
                println!("ok\t{canonical}");
            }
            Err(err @ OutboundUrlError::InvalidBaseUrl { .. }) => {
                invalid += 1;
                println!("invalid\t{candidate}\t{err}");
            }
            Err(err @ OutboundUrlError::PrivateAddressBlocked { .. }) => {
                blocked += 1;
                println!("blocked\t{candidate}\t{err}");
            }
        }
    }

    eprintln!("{accepted} accepted, {invalid} invalid, {blocked} blocked");

    if invalid > 0 {
        Ok(EXIT_INVALID)
    } else if blocked > 0 {
        Ok(EXIT_BLOCKED)
    } else {
        Ok(0)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
