//! Configuration management for termfolio
//!
//! Configuration is split by concern: what the terminal shows, where the
//! hiscore lookup goes, where the CV comes from and goes to, and how the
//! window looks. Every field has a default so a partial file is enough.

pub mod loader;
pub mod theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::theme::ThemeManager;
use crate::error::Result;

/// ASCII banner shown above the welcome message
pub const DEFAULT_BANNER: &str = concat!(
    " _                     _      _                                 \n",
    "| |                   | |    | |                                \n",
    "| |_ ___   ___ _______| | __ | |_ ___  _ __ ___   __ _ ___ ____\n",
    "| __/ _ \\ / __|_  / _ \\ |/ / | __/ _ \\| '_ ` _ \\ / _` / __|_  / \n",
    "| || (_) | (__ / /  __/   <  | || (_) | | | | | | (_| \\__ \\/ /  \n",
    "\\___\\___/ \\___/___\\___|_|\\_\\ \\___\\___/|_| |_| |_|\\__,_|___/___|  \n",
);

pub const DEFAULT_WELCOME: &str = "toczektomasz@proxmox: cat helloword.txt\n\
Howdy, nice to see you there!\n\
\n\
Type 'help' to view a list of available commands.";

pub const DEFAULT_PROXIES: [&str; 5] = [
    "https://cors-anywhere.herokuapp.com/",
    "https://api.codetabs.com/v1/proxy/",
    "https://thingproxy.freeboard.io/fetch/",
    "https://api.allorigins.win/raw?url=",
    "https://cors-proxy.htmldriven.com/?url=",
];

pub const DEFAULT_HISCORE_URL: &str =
    "https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws";

/// Main configuration structure for termfolio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt, banner and welcome animation
    pub terminal: TerminalConfig,

    /// Hiscore lookup
    pub stats: StatsConfig,

    /// CV download
    pub cv: CvConfig,

    /// Window and theme
    pub ui: UiConfig,
}

/// What the terminal shows before any command runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt printed before the input line and every echoed command
    pub prompt: String,

    /// ASCII art above the welcome message; empty hides it
    pub banner: String,

    /// Message typed out at startup
    pub welcome_message: String,

    /// Delay between typed characters
    pub typing_interval_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: ">".to_string(),
            banner: DEFAULT_BANNER.to_string(),
            welcome_message: DEFAULT_WELCOME.to_string(),
            typing_interval_ms: 20,
        }
    }
}

impl TerminalConfig {
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }
}

/// Hiscore lookup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Player whose hiscores are shown
    pub username: String,

    /// Hiscore endpoint, without query string
    pub target_url: String,

    /// Proxy prefixes, tried in order
    pub proxies: Vec<String>,

    /// Bound on each proxy attempt
    pub request_timeout_secs: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            username: "To-chek".to_string(),
            target_url: DEFAULT_HISCORE_URL.to_string(),
            proxies: DEFAULT_PROXIES.iter().map(|p| p.to_string()).collect(),
            request_timeout_secs: 10,
        }
    }
}

impl StatsConfig {
    /// Full hiscore URL for the configured player
    pub fn target(&self) -> String {
        format!("{}?player={}", self.target_url, self.username)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Where the CV is read from and saved to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvConfig {
    /// Bundled PDF
    pub source: PathBuf,

    /// File name used in the destination directory
    pub download_name: String,

    /// Destination directory; the platform download directory when unset
    pub destination: Option<PathBuf>,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets/CV.pdf"),
            download_name: "Toczek Tomasz - Curriculum Vitae.pdf".to_string(),
            destination: None,
        }
    }
}

/// Window and theme settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Font size in points
    pub font_size: u32,

    /// Name of a theme known to [`ThemeManager`]
    pub theme_name: String,

    /// Initial window width
    pub width: f32,

    /// Initial window height
    pub height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14,
            theme_name: "dracula".to_string(),
            width: 1000.0,
            height: 700.0,
        }
    }
}

/// Loaded configuration plus the state derived from it
pub struct RuntimeConfig {
    config: Config,
    theme_manager: ThemeManager,
    config_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Runtime configuration from the default search paths
    pub fn new() -> Result<Self> {
        let (config, config_path) = loader::ConfigLoader::new().load_with_path()?;
        Self::from_parts(config, config_path)
    }

    /// Runtime configuration from an explicit file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config = loader::ConfigLoader::load_from_path(path)?;
        Self::from_parts(config, Some(path.to_path_buf()))
    }

    /// Runtime configuration for an already built [`Config`]
    pub fn from_config(config: Config) -> Result<Self> {
        Self::from_parts(config, None)
    }

    fn from_parts(config: Config, config_path: Option<PathBuf>) -> Result<Self> {
        let mut theme_manager = ThemeManager::new();
        theme_manager.set_theme(&config.ui.theme_name)?;
        Ok(Self {
            config,
            theme_manager,
            config_path,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// File the configuration came from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn theme_manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme_manager
    }

    /// Switch theme and record it in the configuration
    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        self.theme_manager.set_theme(theme_name)?;
        self.config.ui.theme_name = theme_name.to_string();
        Ok(())
    }
}
