use crate::error::{BookListError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Environment variable that overrides where `config.json` lives.
pub const CONFIG_DIR_ENV: &str = "BOOKLIST_CONFIG_DIR";

/// Configuration for booklist, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookListConfig {
    /// List file used when no `--file` is given
    #[serde(default)]
    pub default_file: Option<PathBuf>,

    /// Log level for the command-line client (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BookListConfig {
    fn default() -> Self {
        Self {
            default_file: None,
            log_level: default_log_level(),
        }
    }
}

impl BookListConfig {
    pub const KEYS: [&'static str; 2] = ["default-file", "log-level"];

    /// The directory holding `config.json`: `$BOOKLIST_CONFIG_DIR` if set,
    /// otherwise the platform config directory.
    pub fn dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "booklist", "booklist")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| BookListError::Api("Could not determine config dir".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookListError::Io)?;
        let config: BookListConfig =
            serde_json::from_str(&content).map_err(BookListError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookListError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookListError::Serialization)?;
        fs::write(config_path, content).map_err(BookListError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-file" => Some(
                self.default_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// Set a key from its string form. An empty `default-file` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-file" => {
                self.default_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "log-level" => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(format!(
                        "Invalid log level: {} (expected one of {})",
                        value,
                        LOG_LEVELS.join(", ")
                    ));
                }
                self.log_level = level;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
