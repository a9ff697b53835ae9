//! RON configuration for the `fetchdeck` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use deck_core::CoreSettings;
use deck_engine::{EngineConfig, Endpoints, FetchSettings};
use deck_logging::{deck_info, deck_warn};
use log::LevelFilter;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "fetchdeck.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let settings = FetchSettings::default();
        Self {
            connect_timeout_ms: settings.connect_timeout.as_millis() as u64,
            request_timeout_ms: settings.request_timeout.as_millis() as u64,
            max_bytes: settings.max_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub endpoints: Endpoints,
    pub polygon_api_key: String,
    pub fetch: FetchConfig,
    pub dog_batch_size: usize,
    pub max_in_flight: Option<usize>,
    pub reddit_limit: usize,
    pub carousel_delay_ms: u64,
    pub carousel_transition_ms: u64,
    pub log_level: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        let core = CoreSettings::default();
        Self {
            endpoints: Endpoints::default(),
            polygon_api_key: String::new(),
            fetch: FetchConfig::default(),
            dog_batch_size: core.dog_batch_size,
            max_in_flight: None,
            reddit_limit: core.reddit_limit,
            carousel_delay_ms: core.carousel_delay.as_millis() as u64,
            carousel_transition_ms: core.carousel_transition.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }
}

impl DeckConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Uses `explicit` when given, otherwise `fetchdeck.ron` in the working directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let config = Self::load(path)?;
        deck_info!("Configuration resolved from {:?}", path);
        Ok(config)
    }

    pub fn log_level(&self) -> LevelFilter {
        deck_logging::parse_level(&self.log_level).unwrap_or_else(|| {
            deck_warn!("Unknown log level {:?}; using info", self.log_level);
            LevelFilter::Info
        })
    }

    pub fn core_settings(&self) -> CoreSettings {
        CoreSettings {
            dog_batch_size: self.dog_batch_size,
            reddit_limit: self.reddit_limit,
            carousel_delay: Duration::from_millis(self.carousel_delay_ms),
            carousel_transition: Duration::from_millis(self.carousel_transition_ms),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings {
                connect_timeout: Duration::from_millis(self.fetch.connect_timeout_ms),
                request_timeout: Duration::from_millis(self.fetch.request_timeout_ms),
                max_bytes: self.fetch.max_bytes,
                ..FetchSettings::default()
            },
            endpoints: self.endpoints.clone(),
            polygon_api_key: self.polygon_api_key.clone(),
            max_in_flight: self.max_in_flight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckConfig::load(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, DeckConfig::default());
        assert_eq!(config.dog_batch_size, 10);
        assert_eq!(config.carousel_delay_ms, 3500);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"(
                polygon_api_key: "abc",
                max_in_flight: Some(4),
                endpoints: (dog_ceo: "http://localhost:9000/api"),
                fetch: (request_timeout_ms: 1500),
            )"#,
        );
        let config = DeckConfig::load(file.path()).unwrap();

        assert_eq!(config.polygon_api_key, "abc");
        assert_eq!(config.max_in_flight, Some(4));
        assert_eq!(config.endpoints.dog_ceo, "http://localhost:9000/api");
        assert_eq!(config.endpoints.tradestie, Endpoints::default().tradestie);
        assert_eq!(config.fetch.connect_timeout_ms, 10_000);

        let engine = config.engine_config();
        assert_eq!(engine.fetch.request_timeout, Duration::from_millis(1500));
        assert_eq!(engine.max_in_flight, Some(4));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let file = write_config("(dog_batch_size: \"ten\")");
        let err = DeckConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = DeckConfig {
            log_level: "chatty".to_string(),
            ..DeckConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Info);

        let config = DeckConfig {
            log_level: "Debug".to_string(),
            ..DeckConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn core_settings_carry_carousel_timing() {
        let config = DeckConfig {
            carousel_delay_ms: 1000,
            reddit_limit: 3,
            ..DeckConfig::default()
        };
        let core = config.core_settings();
        assert_eq!(core.carousel_delay, Duration::from_secs(1));
        assert_eq!(core.reddit_limit, 3);
    }
}
