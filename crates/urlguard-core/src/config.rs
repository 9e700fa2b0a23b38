use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/urlguard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Accept plain `http` gateway URLs by default. The CLI's `--allow-http`
    /// flag enables it per invocation regardless of this setting.
    #[serde(default)]
    pub allow_http: bool,
    /// Extra exact hostnames to refuse on top of the built-in denylist
    /// (deployment-specific hosts that must never be dialed).
    #[serde(default)]
    pub blocked_hosts: Vec<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Parse configuration from a TOML file on disk.
pub fn load_from(path: &Path) -> Result<GuardConfig> {
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GuardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GuardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
