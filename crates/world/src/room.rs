//! The room a robot is confined to

use crate::constraints::ROOM_CONSTRAINTS;
use robonav_core::{RobonavError, Result};
use std::fmt;
use tracing::{debug, error};

/// Anything that can bound a robot: the room capability contract
pub trait Bounds {
    /// Extent along x
    fn width(&self) -> i32;

    /// Extent along y
    fn height(&self) -> i32;

    /// Whether `(x, y)` lies in `[0, width] x [0, height]`, far edges included
    fn is_valid_position(&self, x: i32, y: i32) -> bool {
        (0..=self.width()).contains(&x) && (0..=self.height()).contains(&y)
    }
}

/// A rectangular room with validated dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    width: i32,
    height: i32,
}

impl Room {
    /// Create a room, rejecting dimensions outside the room constraints
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if !ROOM_CONSTRAINTS.admits(width, height) {
            error!(subsystem = "room", width, height, "Room dimensions out of range");
            return Err(RobonavError::RoomOutOfRange { width, height });
        }

        debug!(subsystem = "room", width, height, "Room created");
        Ok(Self { width, height })
    }

    /// Room width
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Room height
    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Bounds for Room {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.width, self.height)
    }
}
