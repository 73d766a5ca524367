//! Integration tests for the interactive setup flow with scripted input

use robonav_core::report::{RecordingReporter, SilentReporter};
use robonav_core::Severity;
use robonav_setup::{ScriptedInput, SetupFlow};

/// Room then robot, both confirmed on the first try
#[tokio::test]
async fn test_setup_confirmed_first_time() {
    let mut input = ScriptedInput::new(["5 5", "Y", "2 4 N", "Y"]);
    let reporter = SilentReporter;

    let setup = SetupFlow::new(&mut input, &reporter, true).run().await.unwrap();

    assert_eq!(setup.room.width(), 5);
    assert_eq!(setup.room.height(), 5);
    assert_eq!(setup.robot.x(), 2);
    assert_eq!(setup.robot.y(), 4);
    assert_eq!(setup.robot.orientation().symbol(), 'N');
    assert_eq!(input.remaining(), 0);
}

/// A declined room is discarded entirely
#[tokio::test]
async fn test_setup_with_declined_room() {
    let mut input = ScriptedInput::new(["10 15", "N", "12 18", "Y", "0 18 s", "Y"]);
    let reporter = RecordingReporter::new();

    let setup = SetupFlow::new(&mut input, &reporter, true).run().await.unwrap();

    assert_eq!((setup.room.width(), setup.room.height()), (12, 18));
    assert_eq!(setup.robot.report(), "0 18 S");
    assert!(reporter.contains(Severity::Success, "Width: 10, Height: 15"));
    assert!(reporter.contains(Severity::Success, "Width: 12, Height: 18"));
}

/// Robot coordinates are checked against the room that was just accepted
#[tokio::test]
async fn test_robot_bounds_follow_room() {
    let mut input = ScriptedInput::new(["3 4", "4 4 N", "3"]);
    let reporter = RecordingReporter::new();

    let setup = SetupFlow::new(&mut input, &reporter, false).run().await.unwrap();

    assert_eq!(setup.robot.report(), "3 4 N");
    assert!(reporter.contains(Severity::Error, "\"4\" is not a valid starting position on the x-axis"));
    assert_eq!(
        input.prompts()[2],
        "Enter starting position on the x-axis between 0 and 3: "
    );
}

/// End of input while a field is being re-prompted aborts setup
#[tokio::test]
async fn test_input_closed_mid_setup() {
    let mut input = ScriptedInput::new(["3 4", "1 1 up"]);
    let reporter = SilentReporter;

    let err = SetupFlow::new(&mut input, &reporter, false).run().await.unwrap_err();
    assert!(err.is_input_closed());
}

/// Garbage on every field is re-prompted field by field
#[tokio::test]
async fn test_every_field_reprompted() {
    let mut input = ScriptedInput::new([
        "wide tall",
        "7",
        "7.5",
        "8",
        "maybe",
        "y",
        "-2 x north",
        "7",
        "8",
        "W",
        "Y",
    ]);
    let reporter = RecordingReporter::new();

    let setup = SetupFlow::new(&mut input, &reporter, true).run().await.unwrap();

    assert_eq!(setup.room.to_string(), "7 8");
    assert_eq!(setup.robot.report(), "7 8 W");
    assert!(reporter.contains(Severity::Error, "\"north\" is not a valid orientation."));
    assert!(reporter.contains(
        Severity::Error,
        "Please enter Y or N to confirm or decline room dimensions."
    ));
}
