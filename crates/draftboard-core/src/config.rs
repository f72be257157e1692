//! Application configuration management.
//!
//! Configuration is stored at `~/.config/draftboard/config.json`. Every
//! field is optional; a missing file means defaults everywhere.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::StatView;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "draftboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the dataset location
pub const DATA_ENV_VAR: &str = "DRAFTBOARD_DATA";

/// Places searched for the dataset when nothing else points at it
const DATA_SEARCH_PATHS: [&str; 3] = [
    "data/draft_board.json",
    "./data/draft_board.json",
    "../data/draft_board.json",
];

/// Composite ranks are shown with two decimals unless configured otherwise
const DEFAULT_RANK_PRECISION: u32 = 2;

fn default_rank_precision() -> u32 {
    DEFAULT_RANK_PRECISION
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default = "default_rank_precision")]
    pub rank_precision: u32,
    #[serde(default)]
    pub default_stat_view: StatView,
    /// Source the board opens sorted by; composite when unset.
    #[serde(default)]
    pub default_sort_source: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            rank_precision: DEFAULT_RANK_PRECISION,
            default_stat_view: StatView::default(),
            default_sort_source: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config = serde_json::from_str(&contents)?;
            debug!(path = %path.display(), "Config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for log files.
    pub fn log_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Resolve the dataset path: `DRAFTBOARD_DATA`, then `data_path`, then
    /// the first search path that exists.
    pub fn data_file(&self) -> Option<PathBuf> {
        let from_env = std::env::var(DATA_ENV_VAR).ok();
        self.resolve_data_file(from_env.as_deref())
    }

    fn resolve_data_file(&self, from_env: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = from_env.map(str::trim).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        if let Some(ref path) = self.data_path {
            return Some(path.clone());
        }
        DATA_SEARCH_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }
}
