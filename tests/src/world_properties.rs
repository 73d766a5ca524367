//! Integration tests for room and robot behaviour through the public API

use robonav_core::report::SilentReporter;
use robonav_core::RobonavError;
use robonav_world::validation::{is_valid_dimension, validate_orientation, validate_position};
use robonav_world::{Bounds, Orientation, Robot, Room, ROOM_CONSTRAINTS};
use std::sync::Arc;

#[test]
fn test_dimension_validation_matches_room_construction() {
    let reporter = SilentReporter;
    for value in -1..=22 {
        let text = value.to_string();
        let valid_width = is_valid_dimension(Some(text.as_str()), "width", &reporter).unwrap();
        let valid_height = is_valid_dimension(Some(text.as_str()), "height", &reporter).unwrap();
        assert_eq!(valid_width, Room::new(value, 5).is_ok(), "width {value}");
        assert_eq!(valid_height, Room::new(5, value).is_ok(), "height {value}");
    }
}

#[test]
fn test_position_validation_matches_room_bounds() {
    let reporter = SilentReporter;
    let room = Room::new(ROOM_CONSTRAINTS.width.max, ROOM_CONSTRAINTS.height.min).unwrap();
    for value in -2..=22 {
        let text = value.to_string();
        assert_eq!(
            validate_position(Some(text.as_str()), room.width(), "x", &reporter),
            room.is_valid_position(value, 0)
        );
        assert_eq!(
            validate_position(Some(text.as_str()), room.height(), "y", &reporter),
            room.is_valid_position(0, value)
        );
    }
}

#[test]
fn test_orientation_validation_accepts_what_robots_accept() {
    let reporter = SilentReporter;
    let room = Arc::new(Room::new(5, 5).unwrap());
    for symbol in ['N', 'E', 'S', 'W'] {
        assert!(validate_orientation(Some(symbol.to_string().as_str()), &reporter));
        assert!(validate_orientation(Some(symbol.to_ascii_lowercase().to_string().as_str()), &reporter));
        assert!(Robot::new(0, 0, symbol, Arc::clone(&room)).is_ok());
    }
    assert!(!validate_orientation(Some("X"), &reporter));
    assert!(Robot::new(0, 0, 'X', room).is_err());
}

#[test]
fn test_walk_the_perimeter() {
    let room = Arc::new(Room::new(2, 3).unwrap());
    let mut robot = Robot::place(0, 0, Orientation::N, room).unwrap();

    for command in "FFFRFFRFFFRFFR".chars() {
        robot.execute_command(command).unwrap();
    }
    assert_eq!(robot.report(), "0 0 N");

    // One more step west would leave the room
    robot.execute_command('L').unwrap();
    assert!(matches!(
        robot.execute_command('F'),
        Err(RobonavError::MovedOutOfBounds { x: 0, y: 0, orientation: 'W' })
    ));
    assert_eq!(robot.report(), "0 0 W");
}

#[test]
fn test_robot_sees_the_room_it_was_given() {
    let room = Arc::new(Room::new(9, 4).unwrap());
    let robot = Robot::new(9, 4, 'E', Arc::clone(&room)).unwrap();
    assert_eq!(robot.room(), room.as_ref());
    assert!(Robot::new(10, 4, 'E', room).is_err());
}
