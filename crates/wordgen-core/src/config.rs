use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::setup::DEFAULT_DICTIONARY_URL;

/// Global configuration loaded from `~/.config/wordgen/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordgenConfig {
    /// HTTP(S) URL of the gzip-compressed dictionary tarball.
    pub dictionary_url: String,
    /// Cache directory override; defaults to `~/.wordgen` when absent.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

impl Default for WordgenConfig {
    fn default() -> Self {
        Self {
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            cache_dir: None,
        }
    }
}

impl WordgenConfig {
    /// Directory holding the cached archive and the extracted `dict/` tree.
    pub fn cache_root(&self) -> Result<PathBuf> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(".wordgen"))
                .context("could not determine user home directory"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wordgen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WordgenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WordgenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WordgenConfig = toml::from_str(&data)?;
    Ok(cfg)
}
