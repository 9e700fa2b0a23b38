//! Config command: show the config file path and effective settings.

use anyhow::Result;
use urlguard_core::config::{self, GuardConfig};

/// Print where configuration is read from and what is currently in effect.
pub fn run_config(cfg: &GuardConfig) -> Result<i32> {
    println!("config file: {}", config::config_path()?.display());
    println!("{}", serde_json::to_string_pretty(cfg)?);
    Ok(0)
}
