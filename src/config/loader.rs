//! Configuration File Loading
//!
//! Finds the first configuration file on the search path, parses it as TOML
//! or JSON depending on its extension, and validates the result. When no file
//! exists the defaults are used.

use super::theme::ThemeManager;
use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "TERMFOLIO_CONFIG";

/// Configuration file loader
pub struct ConfigLoader {
    /// Base paths, each tried with every supported extension
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats, in preference order
    supported_formats: Vec<ConfigFormat>,
    /// Path of the file last loaded
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }

    /// Format implied by a file extension; unknown extensions read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl ConfigLoader {
    /// Loader over the default search paths
    pub fn new() -> Self {
        Self::with_search_paths(Self::default_search_paths())
    }

    /// Loader over custom base paths
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration from the default locations
    pub fn load() -> Result<Config> {
        Self::new().load_with_path().map(|(config, _)| config)
    }

    /// Load configuration and report which file it came from
    ///
    /// `TERMFOLIO_CONFIG` takes precedence over the search path. A file that
    /// exists but fails to parse is skipped with a warning.
    pub fn load_with_path(&mut self) -> Result<(Config, Option<PathBuf>)> {
        if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            info!("Loading config from ${}: {}", CONFIG_ENV_VAR, path.display());
            let config = Self::load_from_path(&path)?;
            self.current_path = Some(path.clone());
            return Ok((config, Some(path)));
        }

        if let Some((path, config)) = self.find_and_load_config() {
            Self::validate(&config)?;
            info!("Loaded config from {}", path.display());
            self.current_path = Some(path.clone());
            return Ok((config, Some(path)));
        }

        debug!("No config file found, using defaults");
        Ok((Config::default(), None))
    }

    /// Load and validate one specific file
    pub fn load_from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }
        let config = Self::load_config_file(path, ConfigFormat::from_path(path))?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Save configuration, choosing the format from the extension
    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let format = ConfigFormat::from_path(path);
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: format.label().to_string(),
                    reason: e.to_string(),
                }
            })?,
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                    format: format.label().to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        fs::write(path, content)?;
        Ok(())
    }

    fn find_and_load_config(&self) -> Option<(PathBuf, Config)> {
        for base in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = base.with_extension(format.extension());
                if !config_path.exists() {
                    continue;
                }

                match Self::load_config_file(&config_path, *format) {
                    Ok(config) => return Some((config_path, config)),
                    Err(e) => {
                        warn!(
                            "Failed to load config from {}: {}",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        None
    }

    fn load_config_file(path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: format.label().to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: format.label().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Base paths searched, highest priority first
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("termfolio").join("config"));
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("termfolio").join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".termfolio").join("config"));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(".termfolio").join("config"));
        }

        paths
    }

    /// Reject configurations the application cannot run with
    pub fn validate(config: &Config) -> Result<()> {
        if config.terminal.prompt.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.prompt".to_string(),
                reason: "Prompt cannot be empty".to_string(),
            });
        }

        if config.terminal.typing_interval_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.typing_interval_ms".to_string(),
                reason: "Typing interval must be greater than 0".to_string(),
            });
        }

        if config.stats.proxies.is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "stats.proxies".to_string(),
                reason: "At least one proxy is required".to_string(),
            });
        }

        if config.stats.request_timeout_secs == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "stats.request_timeout_secs".to_string(),
                reason: "Request timeout must be greater than 0".to_string(),
            });
        }

        if !(8..=72).contains(&config.ui.font_size) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: "Font size must be between 8 and 72".to_string(),
            });
        }

        let themes = ThemeManager::new();
        if !themes.has_theme(&config.ui.theme_name) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.theme_name".to_string(),
                reason: format!(
                    "Unknown theme '{}' (available: {})",
                    config.ui.theme_name,
                    themes.list_themes().join(", ")
                ),
            });
        }

        Ok(())
    }

    /// Path of the file last loaded
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
