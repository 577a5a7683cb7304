use std::path::{Path, PathBuf};

use anyhow::Context as _;
use etcetera::BaseStrategy as _;
use memories_query::{DEFAULT_PAGE_SIZE, lfm};
use serde::{Deserialize, Serialize};

/// Which scrobbling service to talk to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    #[default]
    #[serde(alias = "lastfm")]
    LastFm,
    #[serde(alias = "librefm")]
    LibreFm,
}
impl Network {
    pub fn base_url(self) -> &'static str {
        match self {
            Network::LastFm => lfm::Client::LAST_FM_URL,
            Network::LibreFm => lfm::Client::LIBRE_FM_URL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Overridden by `--api-key`.
    pub api_key: Option<String>,
    /// Overridden by `--libre-fm`.
    pub network: Network,
    /// Tracks requested per page of history.
    pub page_size: u32,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            network: Network::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
impl Config {
    pub const APP_NAME: &str = "last.fm-memories";
    pub const FILENAME: &str = "config.toml";

    /// `config.toml` in this tool's directory under the platform's config directory.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let strategy = etcetera::choose_base_strategy()
            .context("Failed to locate the configuration directory")?;
        Ok(strategy
            .config_dir()
            .join(Self::APP_NAME)
            .join(Self::FILENAME))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}
