use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

use crate::app_dirs::AppDirs;
use crate::engine::{
    GameRules, DEFAULT_ROUND_DURATION_SECS, DEFAULT_SKIP_PENALTY_SECS, EASY_POINTS, HARD_POINTS,
};
use crate::language::Language;

/// Startup configuration. Holds settings only, never game progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub timer_enabled: bool,
    pub round_duration_secs: u32,
    pub skip_penalty_secs: u32,
    pub easy_points: u32,
    pub hard_points: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            timer_enabled: true,
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            skip_penalty_secs: DEFAULT_SKIP_PENALTY_SECS,
            easy_points: EASY_POINTS,
            hard_points: HARD_POINTS,
        }
    }
}

impl Config {
    pub fn rules(&self) -> GameRules {
        GameRules {
            round_duration_secs: self.round_duration_secs,
            skip_penalty_secs: self.skip_penalty_secs,
            easy_points: self.easy_points,
            hard_points: self.hard_points,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to access config file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("config file {} is not valid: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub trait ConfigStore {
    /// Never fails: anything unusable falls back to defaults
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self::with_path(AppDirs::config_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when there is no file yet
    pub fn read(&self) -> Result<Option<Config>, ConfigError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ConfigError::Invalid {
                path: self.path.clone(),
                source,
            })
    }

    fn io_error(&self, source: io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match self.read() {
            Ok(Some(cfg)) => cfg,
            Ok(None) => Config::default(),
            Err(err) => {
                tracing::warn!(%err, "using default settings");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(|source| ConfigError::Invalid {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, data).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nested").join("config.json"));
        let cfg = Config {
            language: Language::Es,
            timer_enabled: false,
            round_duration_secs: 60,
            skip_penalty_secs: 3,
            easy_points: 1,
            hard_points: 3,
        };

        store.save(&cfg).unwrap();

        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));

        assert_matches!(store.read(), Ok(None));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        let store = FileConfigStore::with_path(&path);

        assert_matches!(store.read(), Err(ConfigError::Invalid { .. }));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn unknown_language_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "language": "fr" }"#).unwrap();

        assert_matches!(
            FileConfigStore::with_path(&path).read(),
            Err(ConfigError::Invalid { .. })
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "language": "es", "round_duration_secs": 60 }"#).unwrap();
        let loaded = FileConfigStore::with_path(&path).load();

        assert_eq!(loaded.language, Language::Es);
        assert_eq!(loaded.round_duration_secs, 60);
        assert!(loaded.timer_enabled);
        assert_eq!(loaded.skip_penalty_secs, DEFAULT_SKIP_PENALTY_SECS);
    }

    #[test]
    fn reading_a_directory_reports_io_error() {
        let dir = tempdir().unwrap();

        assert_matches!(
            FileConfigStore::with_path(dir.path()).read(),
            Err(ConfigError::Io { .. })
        );
    }

    #[test]
    fn default_config_matches_default_rules() {
        assert_eq!(Config::default().rules(), GameRules::default());
    }
}
