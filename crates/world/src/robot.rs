//! Robot placement and movement

use crate::constraints::ROOM_CONSTRAINTS;
use crate::orientation::{Command, Orientation};
use crate::room::{Bounds, Room};
use robonav_core::{RobonavError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};

/// A robot placed inside a room.
///
/// The room is fixed at construction. Position and orientation only change
/// through [`Robot::execute_command`] and the turn/move operations it calls.
#[derive(Debug, Clone)]
pub struct Robot<B: Bounds = Room> {
    x: i32,
    y: i32,
    orientation: Orientation,
    room: Arc<B>,
}

impl<B: Bounds> Robot<B> {
    /// Place a robot from a raw orientation symbol.
    ///
    /// Fails with [`RobonavError::InvalidRoom`] when `room` does not satisfy the
    /// room constraints, [`RobonavError::PlacementOutOfBounds`] when `(x, y)` is
    /// outside it, and [`RobonavError::InvalidOrientation`] when `orientation`
    /// is not one of `N`, `E`, `S`, `W` (upper-case).
    pub fn new(x: i32, y: i32, orientation: char, room: Arc<B>) -> Result<Self> {
        check_room(room.as_ref())?;
        check_placement(x, y, room.as_ref())?;
        let orientation = Orientation::try_from(orientation).map_err(|e| {
            error!(subsystem = "robot", orientation = %orientation, "Invalid robot orientation");
            e
        })?;

        Ok(Self::placed(x, y, orientation, room))
    }

    /// Place a robot with an already typed orientation
    pub fn place(x: i32, y: i32, orientation: Orientation, room: Arc<B>) -> Result<Self> {
        check_room(room.as_ref())?;
        check_placement(x, y, room.as_ref())?;
        Ok(Self::placed(x, y, orientation, room))
    }

    fn placed(x: i32, y: i32, orientation: Orientation, room: Arc<B>) -> Self {
        debug!(subsystem = "robot", x, y, orientation = %orientation, "Robot placed");
        Self { x, y, orientation, room }
    }

    /// Execute one command character.
    ///
    /// `L` and `R` turn, `F` moves forward. Any other character does nothing.
    /// Only a forward move that would leave the room fails.
    pub fn execute_command(&mut self, command: char) -> Result<()> {
        match Command::parse(command) {
            Some(Command::Left) => self.turn_left(),
            Some(Command::Right) => self.turn_right(),
            Some(Command::Forward) => self.move_forward()?,
            None => trace!(subsystem = "robot", command = %command, "Ignoring unknown command"),
        }
        Ok(())
    }

    /// Rotate counter-clockwise
    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.left();
        trace!(subsystem = "robot", orientation = %self.orientation, "Turned left");
    }

    /// Rotate clockwise
    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.right();
        trace!(subsystem = "robot", orientation = %self.orientation, "Turned right");
    }

    /// Advance one unit in the facing direction.
    ///
    /// A move that would leave the room is rejected and the robot stays put.
    pub fn move_forward(&mut self) -> Result<()> {
        let (dx, dy) = self.orientation.delta();
        let (nx, ny) = (self.x + dx, self.y + dy);

        if !self.room.is_valid_position(nx, ny) {
            warn!(
                subsystem = "robot",
                x = self.x,
                y = self.y,
                orientation = %self.orientation,
                "Move rejected, robot would leave the room"
            );
            return Err(RobonavError::MovedOutOfBounds {
                x: self.x,
                y: self.y,
                orientation: self.orientation.symbol(),
            });
        }

        self.x = nx;
        self.y = ny;
        trace!(subsystem = "robot", x = nx, y = ny, "Moved forward");
        Ok(())
    }

    /// Position and orientation as `x y orientation`
    pub fn report(&self) -> String {
        format!("{} {} {}", self.x, self.y, self.orientation)
    }

    /// Current x coordinate
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Current y coordinate
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The room bounding this robot
    pub fn room(&self) -> &B {
        &self.room
    }
}

impl<B: Bounds> fmt::Display for Robot<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}

fn check_room<B: Bounds + ?Sized>(room: &B) -> Result<()> {
    let (width, height) = (room.width(), room.height());
    if !ROOM_CONSTRAINTS.admits(width, height) {
        error!(subsystem = "robot", width, height, "Robot given an invalid room");
        return Err(RobonavError::InvalidRoom { width, height });
    }
    Ok(())
}

fn check_placement<B: Bounds + ?Sized>(x: i32, y: i32, room: &B) -> Result<()> {
    if !room.is_valid_position(x, y) {
        error!(subsystem = "robot", x, y, "Robot placed out of bounds");
        return Err(RobonavError::PlacementOutOfBounds { x, y });
    }
    Ok(())
}
