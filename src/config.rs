// config.rs - defaults, JSON file, validation
use crate::dataset::DEFAULT_POINT_COUNT;
use crate::render::PlotSize;
use crate::session::driver::DEFAULT_INIT_METHOD;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "http://localhost:3000";
pub const DEFAULT_OUTPUT: &str = "kmeans.svg";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the clustering server.
    pub server: String,
    /// Points per generated dataset.
    pub points: usize,
    pub width: u32,
    pub height: u32,
    pub init_method: String,
    /// Where the SVG is written after each redraw.
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let size = PlotSize::default();
        Self {
            server: DEFAULT_SERVER.to_string(),
            points: DEFAULT_POINT_COUNT,
            width: size.width,
            height: size.height,
            init_method: DEFAULT_INIT_METHOD.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.trim().is_empty() {
            return Err(ConfigError::Invalid("server URL is empty".to_string()));
        }
        if self.points == 0 {
            return Err(ConfigError::Invalid("points must be at least 1".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "plot size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid("timeout must be positive".to_string()));
        }
        Ok(())
    }

    pub fn plot_size(&self) -> PlotSize {
        PlotSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
