//! Robonav configuration management and parsing
//!
//! Configuration management and parsing with structured logging support.

#![warn(missing_docs)]
#![deny(unsafe_code)]

use robonav_core::logging::{modules, LogLevel, LoggingConfig};
use robonav_core::RobonavError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Main configuration structure for Robonav
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Setup session configuration
    pub session: SessionConfig,
    /// Console output configuration
    pub console: ConsoleConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Whether acquired room and robot values are reviewed before acceptance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmMode {
    /// Ask the operator once at startup
    #[default]
    Ask,
    /// Always review
    Always,
    /// Accept the first valid values
    Never,
}

/// Setup session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Confirmation mode
    pub confirm: ConfirmMode,
    /// Clear the console before the banner and summary blocks
    pub clear_screen: bool,
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Colour reported messages by severity
    pub colors: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confirm: ConfirmMode::Ask,
            clear_screen: true,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from file
    #[instrument(name = "config_load", skip(path))]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> robonav_core::Result<Self> {
        let path = path.as_ref();
        info!(
            subsystem = "config",
            config_file = ?path,
            "Loading configuration from file"
        );

        let content = std::fs::read_to_string(path).map_err(|e| {
            error!(
                subsystem = "config",
                config_file = ?path,
                error = %e,
                "Failed to read configuration file"
            );
            RobonavError::Configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            error!(
                subsystem = "config",
                config_file = ?path,
                error = %e,
                "Failed to parse configuration file"
            );
            RobonavError::Configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            subsystem = "config",
            config_file = ?path,
            logging_level = ?config.logging.global_level,
            confirm = ?config.session.confirm,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save configuration to file
    #[instrument(name = "config_save", skip(self, path))]
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> robonav_core::Result<()> {
        let path = path.as_ref();
        info!(
            subsystem = "config",
            config_file = ?path,
            "Saving configuration to file"
        );

        let content = toml::to_string_pretty(self).map_err(|e| {
            error!(subsystem = "config", error = %e, "Failed to serialize configuration");
            RobonavError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| {
            error!(
                subsystem = "config",
                config_file = ?path,
                error = %e,
                "Failed to write configuration file"
            );
            RobonavError::Configuration(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(subsystem = "config", config_file = ?path, "Configuration saved successfully");
        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("robonav")
        } else {
            warn!(
                subsystem = "config",
                "No standard config directory found, using current directory"
            );
            PathBuf::from(".")
        };

        config_dir.join("config.toml")
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// is missing or cannot be used
    #[instrument(name = "config_load_or_default", skip(path))]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                subsystem = "config",
                config_file = ?path,
                "Configuration file does not exist, using defaults"
            );
            return Self::default();
        }

        match Self::load_from_file(path).and_then(|config| config.validate().map(|_| config)) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    subsystem = "config",
                    config_file = ?path,
                    error = %e,
                    "Failed to load config file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Update logging level for a specific module
    #[instrument(name = "config_update_log_level", skip(self))]
    pub fn update_log_level(&mut self, module: &str, level: LogLevel) {
        debug!(
            subsystem = "config",
            module = module,
            level = ?level,
            "Updating log level for module"
        );
        self.logging.module_levels.insert(module.to_string(), level);
    }

    /// Validate configuration values
    #[instrument(name = "config_validate", skip(self))]
    pub fn validate(&self) -> robonav_core::Result<()> {
        debug!(subsystem = "config", "Validating configuration");

        for module in self.logging.module_levels.keys() {
            if !modules::is_known(module) {
                error!(subsystem = "config", module = %module, "Unknown logging module");
                return Err(RobonavError::Configuration(format!(
                    "Unknown logging module '{}', expected one of: {}",
                    module,
                    modules::ALL.join(", ")
                )));
            }
        }

        debug!(subsystem = "config", "Configuration validation passed");
        Ok(())
    }
}
