//! Configuration for the demo runner.
//!
//! Loaded from TOML. Every section and field is optional; anything missing
//! falls back to the values the demos were written around.
//!
//! ```toml
//! [iterator]
//! track_count = 10
//!
//! [observer]
//! initial_speed = 50
//! readings = [90, 110, 90]
//! speed_limit = 100
//!
//! [runner]
//! pause_between_demos = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from locating or parsing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub iterator: IteratorConfig,
    pub observer: ObserverConfig,
    pub runner: RunnerConfig,
}

/// Settings for the playlist walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IteratorConfig {
    /// Number of tracks generated for the playlist
    pub track_count: usize,
}

impl Default for IteratorConfig {
    fn default() -> Self {
        Self { track_count: 10 }
    }
}

/// Settings for the speed sensor walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Value the sensor starts with (no notification)
    pub initial_speed: i64,
    /// Readings written to the sensor, in order
    pub readings: Vec<i64>,
    /// Alarm threshold
    pub speed_limit: i64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            initial_speed: 50,
            readings: vec![90, 110, 90],
            speed_limit: 100,
        }
    }
}

/// Settings for the demo runner itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Wait for Enter between demos (only on an interactive terminal)
    pub pause_between_demos: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            pause_between_demos: true,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/pattern-demos/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("pattern-demos").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from an explicit path, or from [`Config::config_path`] if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = match Self::config_path() {
                    Ok(path) => path,
                    Err(err) => {
                        tracing::debug!(%err, "using default config");
                        return Ok(Self::default());
                    }
                };
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML content.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_content_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.iterator.track_count, 10);
        assert_eq!(config.observer.readings, vec![90, 110, 90]);
        assert!(config.runner.pause_between_demos);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::parse("[observer]\nspeed_limit = 60\n").unwrap();
        assert_eq!(config.observer.speed_limit, 60);
        assert_eq!(config.observer.initial_speed, 50);
        assert_eq!(config.iterator.track_count, 10);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Config::parse("[iterator]\ntrack_count = \"ten\"\n").is_err());
    }

    #[test]
    fn serialized_defaults_round_trip() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("[iterator]"));
        assert_eq!(Config::parse(&text).unwrap(), Config::default());
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[iterator]\ntrack_count = 3").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.iterator.track_count, 3);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn parse_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[runner\n").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Invalid config file"));
    }
}
