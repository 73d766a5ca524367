//! Error types for Robonav

use thiserror::Error;

/// Main error type for Robonav operations
///
/// Bad user input never surfaces here: it is reported and re-prompted by the
/// setup flow. Everything in this enum aborts the operation that produced it.
#[derive(Error, Debug)]
pub enum RobonavError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input port reached end-of-input
    #[error("Input closed, exiting.")]
    InputClosed,

    /// Dimension validation was asked about an axis that has no constraints
    #[error("Invalid dimension '{0}', exiting the program.")]
    UnknownAxis(String),

    /// Room constructed with dimensions outside the allowed range
    #[error("Room dimensions {width}x{height} are outside the allowed range, exiting the program.")]
    RoomOutOfRange {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// Robot placed outside its room
    #[error("Robot is being placed out of bounds at ({x}, {y}), exiting the program.")]
    PlacementOutOfBounds {
        /// Requested x coordinate
        x: i32,
        /// Requested y coordinate
        y: i32,
    },

    /// Robot constructed with an orientation outside N/E/S/W
    #[error("Invalid orientation '{0}' for Robot, exiting the program.")]
    InvalidOrientation(char),

    /// Robot given bounds that do not satisfy the room contract
    #[error("Invalid Room ({width}x{height}), robot cannot be placed, exiting the program.")]
    InvalidRoom {
        /// Width reported by the bounds
        width: i32,
        /// Height reported by the bounds
        height: i32,
    },

    /// A forward move would have left the room
    #[error("Robot moved out of bounds! Facing {orientation} at ({x}, {y}).")]
    MovedOutOfBounds {
        /// Position before the rejected move
        x: i32,
        /// Position before the rejected move
        y: i32,
        /// Orientation at the time of the move
        orientation: char,
    },
}

impl RobonavError {
    /// Whether this error is the normal end of an interactive session
    pub fn is_input_closed(&self) -> bool {
        matches!(self, RobonavError::InputClosed)
    }
}
