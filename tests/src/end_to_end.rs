//! End-to-end runs of the application with scripted input

use robonav_cli::{Cli, RobonavApp};
use robonav_config::{Config, ConfirmMode};
use robonav_core::report::RecordingReporter;
use robonav_core::{RobonavError, Severity};
use robonav_setup::ScriptedInput;

fn app_with(confirm: ConfirmMode) -> RobonavApp {
    let mut config = Config::default();
    config.session.confirm = confirm;
    RobonavApp::new(config)
}

/// Full session: ask for confirmation mode, set up, drive, finish
#[tokio::test]
async fn test_full_session() {
    let mut input = ScriptedInput::new([
        "y", "5 5", "Y", "1 2 N", "Y", "LFRFFRFRF", "", "ignored",
    ]);
    let reporter = RecordingReporter::new();

    let outcome = app_with(ConfirmMode::Ask).run(&mut input, &reporter).await.unwrap();

    // L->W F->(0,2) R->N F->(0,3) F->(0,4) R->E F->(1,4) R->S F->(1,3)
    assert_eq!(outcome.final_report, "1 3 S");
    assert_eq!(input.remaining(), 1);
    assert!(reporter.contains(Severity::Message, "Welcome to Robot Programming!"));
    assert!(reporter.contains(Severity::Message, "Room width: 5"));
    assert!(reporter.contains(Severity::Success, "Report: 1 3 S"));
}

/// A move out of the room ends the run with the movement fault
#[tokio::test]
async fn test_session_stops_at_wall() {
    let mut input = ScriptedInput::new(["2 2", "0 0 S", "F"]);
    let reporter = RecordingReporter::new();

    let err = app_with(ConfirmMode::Never)
        .run(&mut input, &reporter)
        .await
        .unwrap_err();

    assert!(matches!(err, RobonavError::MovedOutOfBounds { x: 0, y: 0, orientation: 'S' }));
    assert!(reporter.messages(Severity::Success).is_empty());
}

/// Closing input during setup is reported as a clean shutdown
#[tokio::test]
async fn test_input_closed_during_setup() {
    let mut input = ScriptedInput::new(["Y", "5 5"]);
    let reporter = RecordingReporter::new();

    let err = app_with(ConfirmMode::Ask).run(&mut input, &reporter).await.unwrap_err();
    assert!(err.is_input_closed());
}

/// Configuration file and flags decide the confirmation mode
#[tokio::test]
async fn test_config_file_controls_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[session]\nconfirm = \"always\"\nclear_screen = false\n").unwrap();

    let cli = Cli {
        config: Some(path.clone()),
        ..Cli::default()
    };
    let config = cli.load_config().unwrap();
    assert_eq!(config.session.confirm, ConfirmMode::Always);
    assert!(!config.session.clear_screen);

    let mut input = ScriptedInput::new(["4 4", "N", "6 6", "Y", "3 3 w", "Y", ""]);
    let reporter = RecordingReporter::new();
    let outcome = RobonavApp::new(config).run(&mut input, &reporter).await.unwrap();
    assert_eq!(outcome.setup.room.width(), 6);
    assert_eq!(outcome.final_report, "3 3 W");

    let cli = Cli {
        config: Some(path),
        no_confirm: true,
        ..Cli::default()
    };
    assert_eq!(cli.load_config().unwrap().session.confirm, ConfirmMode::Never);
}
