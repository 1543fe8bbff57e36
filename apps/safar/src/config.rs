use std::{
    fs,
    path::{Path, PathBuf},
};

use safar_core::{Language, Size};
use serde::Deserialize;
use thiserror::Error;
use web_time::Duration;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown language code {0:?}")]
    Language(String),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}

/// Mock-flow pacing, in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub driver_search_ms: u64,
    pub eta_tick_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            driver_search_ms: 3000,
            eta_tick_ms: 60_000,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub viewport: ViewportConfig,
    /// Preferences file; `None` keeps them in memory.
    pub storage: Option<PathBuf>,
    /// Fixed seed for offers and ids; random when unset.
    pub seed: Option<u64>,
    /// Language used until the user picks one.
    pub language: Option<String>,
    pub timing: TimingConfig,
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = toml::from_str(raw)?;
        cfg.initial_language()?;
        Ok(cfg)
    }

    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn viewport_size(&self) -> Size {
        Size::new(self.viewport.width, self.viewport.height)
    }

    pub fn initial_language(&self) -> Result<Option<Language>, ConfigError> {
        self.language
            .as_deref()
            .map(|code| Language::from_code(code).ok_or_else(|| ConfigError::Language(code.into())))
            .transpose()
    }

    pub fn driver_search_delay(&self) -> Duration {
        Duration::from_millis(self.timing.driver_search_ms)
    }

    pub fn eta_tick(&self) -> Duration {
        Duration::from_millis(self.timing.eta_tick_ms.max(1))
    }
}
