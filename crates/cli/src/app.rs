//! Robonav application
//!
//! Program flow from the welcome banner to the end of the command session.

use crate::session::run_commands;
use robonav_config::{Config, ConfirmMode};
use robonav_core::{Reporter, Result, Severity};
use robonav_setup::{should_confirm_before_continue, InputPort, Setup, SetupFlow};
use robonav_world::ROOM_CONSTRAINTS;
use std::process::ExitCode;
use tracing::{error, info, instrument};

/// Main Robonav application
pub struct RobonavApp {
    config: Config,
}

/// What a completed run leaves behind
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The confirmed room and the robot after its last command
    pub setup: Setup,
    /// The robot's final `x y orientation` report
    pub final_report: String,
}

impl RobonavApp {
    /// Create an application with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run banner, setup and command session against the given collaborators
    #[instrument(name = "app_run", skip_all, fields(confirm = ?self.config.session.confirm))]
    pub async fn run<I: InputPort>(&self, input: &mut I, reporter: &dyn Reporter) -> Result<Outcome> {
        reporter.clear_screen();
        reporter.report(&welcome_banner(), Severity::Message);

        let confirm = match self.config.session.confirm {
            ConfirmMode::Ask => should_confirm_before_continue(&mut *input, reporter).await?,
            ConfirmMode::Always => true,
            ConfirmMode::Never => false,
        };
        info!(subsystem = "cli", confirm, "Confirmation mode resolved");

        let mut setup = SetupFlow::new(&mut *input, reporter, confirm).run().await?;

        reporter.clear_screen();
        reporter.report(&summary(&setup), Severity::Message);

        let final_report = run_commands(input, reporter, &mut setup.robot).await?;
        Ok(Outcome { setup, final_report })
    }
}

/// Process exit status derived from a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal completion or closed input
    Success,
    /// A fatal error stopped the run
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Report how a run ended and pick the exit status
///
/// Closed input is a clean shutdown. Every other error is reported once, in
/// the error colour, and fails the process.
pub fn conclude(result: Result<Outcome>, reporter: &dyn Reporter) -> ExitStatus {
    match result {
        Ok(outcome) => {
            info!(subsystem = "cli", report = %outcome.final_report, "Session complete");
            ExitStatus::Success
        }
        Err(e) if e.is_input_closed() => {
            info!(subsystem = "cli", "Input closed");
            reporter.report_one(&e.to_string(), Severity::Message);
            ExitStatus::Success
        }
        Err(e) => {
            error!(subsystem = "cli", error = %e, "Robonav stopped");
            reporter.report_one(&e.to_string(), Severity::Error);
            ExitStatus::Failure
        }
    }
}

fn welcome_banner() -> Vec<String> {
    let mut lines = vec![
        "Welcome to Robot Programming!".to_string(),
        "In this program we will create a room and set up a robot that can be navigated through the created space.".to_string(),
        "Begin by specifying the dimensions of the room.".to_string(),
        String::new(),
        "Please note the following constraints of the room:".to_string(),
    ];
    lines.extend(ROOM_CONSTRAINTS.describe());
    lines
}

fn summary(setup: &Setup) -> Vec<String> {
    vec![
        "Room and Robot Confirmed".to_string(),
        String::new(),
        "Room dimensions".to_string(),
        format!("Room width: {}", setup.room.width()),
        format!("Room height: {}", setup.room.height()),
        String::new(),
        "Robot position".to_string(),
        format!("Robot x: {}", setup.robot.x()),
        format!("Robot y: {}", setup.robot.y()),
        format!("Robot facing: {}", setup.robot.orientation()),
    ]
}
