//! Robonav world model
//!
//! Room constraints, input validation, and the room/robot state machine.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constraints;
pub mod orientation;
pub mod robot;
pub mod room;
pub mod validation;

pub use constraints::{Axis, DimensionConstraint, RoomConstraints, ROOM_CONSTRAINTS};
pub use orientation::{Command, Orientation};
pub use robot::Robot;
pub use room::{Bounds, Room};
