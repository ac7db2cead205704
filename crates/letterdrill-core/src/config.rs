//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level letterdrill configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterdrillConfig {
    /// File backing the persisted drill settings.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// Print NATO phonetic words in feedback and the index table.
    #[serde(default = "default_true")]
    pub show_phonetic: bool,
    /// Show the correct answer after a wrong submission.
    #[serde(default = "default_true")]
    pub reveal_answers: bool,
    /// Write a JSON report for every finished session into this directory.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

fn default_settings_path() -> PathBuf {
    dirs_path()
        .map(|dir| dir.join("settings.json"))
        .unwrap_or_else(|| PathBuf::from(".letterdrill-settings.json"))
}

fn default_true() -> bool {
    true
}

impl Default for LetterdrillConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            show_phonetic: true,
            reveal_answers: true,
            report_dir: None,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `letterdrill.toml` in the current directory
/// 2. `~/.config/letterdrill/config.toml`
///
/// `LETTERDRILL_SETTINGS` overrides `settings_path`.
pub fn load_config() -> Result<LetterdrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<LetterdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("letterdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => LetterdrillConfig::default(),
    };

    if let Ok(settings) = std::env::var("LETTERDRILL_SETTINGS") {
        if !settings.is_empty() {
            config.settings_path = PathBuf::from(settings);
        }
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<LetterdrillConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("letterdrill"))
}
