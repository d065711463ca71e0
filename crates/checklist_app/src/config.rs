//! RON configuration for the checklist app.
//!
//! ```ron
//! (
//!     source: Http((url: "http://localhost:8080/checks", request_timeout_secs: 5)),
//!     log: (destination: Both, level: Debug, file: "checklist.log"),
//! )
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use checklist_core::Check;
use checklist_engine::{
    ChecklistClient, FetchSettings, FileChecklistClient, HttpChecklistClient,
    StaticChecklistClient,
};
use checklist_logging::{checklist_info, LogDestination};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOCAL_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub log: LogConfig,
}

/// Where the checklist comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceConfig {
    /// Built-in sample checks.
    #[default]
    Demo,
    Static(Vec<Check>),
    /// JSON array of checks on disk.
    File(PathBuf),
    Http(HttpSource),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSource {
    pub url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for HttpSource {
    fn default() -> Self {
        let settings = FetchSettings::default();
        Self {
            url: String::new(),
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            max_bytes: settings.max_bytes,
        }
    }
}

impl HttpSource {
    pub fn settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }
}

impl SourceConfig {
    pub fn build_client(&self) -> Arc<dyn ChecklistClient> {
        match self {
            SourceConfig::Demo => Arc::new(StaticChecklistClient::new(demo_checks())),
            SourceConfig::Static(checks) => Arc::new(StaticChecklistClient::new(checks.clone())),
            SourceConfig::File(path) => Arc::new(FileChecklistClient::new(path.clone())),
            SourceConfig::Http(http) => {
                Arc::new(HttpChecklistClient::new(http.url.clone(), http.settings()))
            }
        }
    }
}

impl SourceConfig {
    /// Upper bound on how long one fetch from this source may take.
    pub fn fetch_timeout(&self) -> Duration {
        match self {
            SourceConfig::Http(http) => {
                let settings = http.settings();
                settings.connect_timeout + settings.request_timeout
            }
            SourceConfig::Demo | SourceConfig::Static(_) | SourceConfig::File(_) => {
                LOCAL_FETCH_TIMEOUT
            }
        }
    }
}

pub fn demo_checks() -> Vec<Check> {
    ["Passport", "Charger", "Toothbrush", "Umbrella"]
        .into_iter()
        .map(Check::new)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub destination: LogDestination,
    pub level: LevelFilter,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: LogDestination::File,
            level: LevelFilter::Info,
            file: PathBuf::from("./checklist.log"),
        }
    }
}

/// Reads and parses a config file. A missing file is an error.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &content)
}

/// Like `load_config`, but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            checklist_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_config(path, &content)
}

fn parse_config(path: &Path, content: &str) -> Result<AppConfig, ConfigError> {
    ron::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
