//! Robonav structured logging infrastructure
//!
//! Centralized logging configuration with per-module level controls.
//! Log output always goes to stderr; stdout belongs to the interactive prompts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "ROBONAV_LOG";

/// Logging configuration for Robonav
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level (applies when module-specific level not set)
    pub global_level: LogLevel,
    /// Per-module log level overrides
    pub module_levels: HashMap<String, LogLevel>,
    /// Whether to include timestamps in log output
    pub include_timestamps: bool,
    /// Whether to include severity levels in log output
    pub include_severity: bool,
    /// Whether to include subsystem/module names in log output
    pub include_subsystem: bool,
    /// Whether to use JSON format for structured output
    pub json_format: bool,
    /// Whether to use ANSI colors in output (when not JSON)
    pub use_colors: bool,
}

/// Log levels for Robonav modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show all logs including trace
    Trace,
    /// Show debug and above
    Debug,
    /// Show info and above
    Info,
    /// Show warnings and above (default, keeps the console quiet)
    Warn,
    /// Show only errors
    Error,
    /// Disable all logging for this module
    Off,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_level: LogLevel::Warn,
            module_levels: HashMap::new(),
            include_timestamps: true,
            include_severity: true,
            include_subsystem: true,
            json_format: false,
            use_colors: true,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}

/// Module names for per-module logging configuration
pub mod modules {
    /// Core module logging identifier
    pub const CORE: &str = "robonav_core";
    /// Room and robot model logging identifier
    pub const WORLD: &str = "robonav_world";
    /// Interactive setup flow logging identifier
    pub const SETUP: &str = "robonav_setup";
    /// Configuration module logging identifier
    pub const CONFIG: &str = "robonav_config";
    /// CLI module logging identifier
    pub const CLI: &str = "robonav_cli";

    /// Every module that accepts a level override
    pub const ALL: [&str; 5] = [CORE, WORLD, SETUP, CONFIG, CLI];

    /// Whether `name` is a known Robonav module
    pub fn is_known(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Initialize the logging system with the given configuration
pub fn init_logging(config: &LoggingConfig) -> crate::Result<()> {
    let env_filter = build_env_filter(config)?;
    let registry = Registry::default().with(env_filter);

    if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(std::io::stderr);

        registry.with(json_layer).try_init().map_err(|e| {
            crate::RobonavError::Configuration(format!("Failed to initialize JSON logging: {}", e))
        })?;
    } else if config.include_timestamps {
        let fmt_layer = fmt::layer()
            .with_target(config.include_subsystem)
            .with_level(config.include_severity)
            .with_ansi(config.use_colors)
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(std::io::stderr);

        registry.with(fmt_layer).try_init().map_err(|e| {
            crate::RobonavError::Configuration(format!("Failed to initialize logging: {}", e))
        })?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(config.include_subsystem)
            .with_level(config.include_severity)
            .with_ansi(config.use_colors)
            .without_time()
            .with_writer(std::io::stderr);

        registry.with(fmt_layer).try_init().map_err(|e| {
            crate::RobonavError::Configuration(format!("Failed to initialize logging: {}", e))
        })?;
    }

    Ok(())
}

/// Build an environment filter from the logging configuration
pub fn build_env_filter(config: &LoggingConfig) -> crate::Result<EnvFilter> {
    let mut filter = EnvFilter::new("");

    let global_level: LevelFilter = config.global_level.into();
    for module in modules::ALL {
        filter = filter.add_directive(parse_directive(&format!("{}={}", module, global_level))?);
    }

    for (module, level) in &config.module_levels {
        let level: LevelFilter = (*level).into();
        filter = filter.add_directive(parse_directive(&format!("{}={}", module, level))?);
    }

    // Allow environment variable override
    if let Ok(env_filter) = std::env::var(LOG_ENV_VAR) {
        match env_filter.parse() {
            Ok(env_directive) => filter = filter.add_directive(env_directive),
            Err(e) => tracing::warn!(
                variable = LOG_ENV_VAR,
                error = %e,
                "Ignoring unparsable log filter override"
            ),
        }
    }

    Ok(filter)
}

fn parse_directive(directive: &str) -> crate::Result<tracing_subscriber::filter::Directive> {
    directive.parse().map_err(|e| {
        crate::RobonavError::Configuration(format!("Invalid log directive '{}': {}", directive, e))
    })
}

/// Get default development logging configuration
pub fn dev_config() -> LoggingConfig {
    let mut config = LoggingConfig::default();
    config.global_level = LogLevel::Debug;
    config.include_timestamps = false;

    config.module_levels.insert(modules::WORLD.to_string(), LogLevel::Debug);
    config.module_levels.insert(modules::SETUP.to_string(), LogLevel::Debug);

    config
}
