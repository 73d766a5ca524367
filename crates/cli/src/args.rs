//! Command-line arguments

use clap::Parser;
use robonav_config::{Config, ConfirmMode};
use std::path::PathBuf;
use tracing::debug;

/// Command-line arguments for the robonav binary
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "robonav")]
#[command(about = "Set up a room, place a robot in it and drive it around")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Always review the room and robot before accepting them
    #[arg(long, conflicts_with = "no_confirm")]
    pub confirm: bool,

    /// Accept the first valid room and robot without review
    #[arg(long)]
    pub no_confirm: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Never clear the screen
    #[arg(long)]
    pub no_clear: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the configuration this invocation asks for and apply flag overrides.
    ///
    /// An explicitly named file must load and validate; the default location
    /// silently falls back to defaults.
    pub fn load_config(&self) -> robonav_core::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let config = Config::load_from_file(path)?;
                config.validate()?;
                config
            }
            None => Config::load_or_default(Config::default_config_path()),
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply flag overrides on top of `config`
    pub fn apply(&self, config: &mut Config) {
        if self.confirm {
            config.session.confirm = ConfirmMode::Always;
        } else if self.no_confirm {
            config.session.confirm = ConfirmMode::Never;
        }
        if self.no_color {
            config.console.colors = false;
            config.logging.use_colors = false;
        }
        if self.no_clear {
            config.session.clear_screen = false;
        }
        debug!(subsystem = "cli", overrides = ?self, "Applied command-line overrides");
    }
}
