// Configuration file handling

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "hookboard";
const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_ENDPOINTS_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(8).unwrap();
const DEFAULT_EVENTS_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();
const DEFAULT_LOGS_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Dashboard settings read from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints_page_size: NonZeroUsize,
    pub events_page_size: NonZeroUsize,
    /// Logs grow by this many lines per "load more"
    pub logs_batch_size: NonZeroUsize,
    /// Where exports are written; current directory when unset
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints_page_size: DEFAULT_ENDPOINTS_PAGE_SIZE,
            events_page_size: DEFAULT_EVENTS_PAGE_SIZE,
            logs_batch_size: DEFAULT_LOGS_BATCH_SIZE,
            export_dir: None,
        }
    }
}

impl Config {
    /// `<config dir>/hookboard/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or the default location when `None`
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => {
                debug!("No config directory available, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            debug!(path = ?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))?;

        info!(path = ?path, "Loaded config");
        Ok(config)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
