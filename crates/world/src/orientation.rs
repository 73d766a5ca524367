//! Compass orientation and robot commands

use robonav_core::{RobonavError, Result};
use std::fmt;
use std::str::FromStr;

/// The compass direction a robot faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// North, +y
    N,
    /// East, +x
    E,
    /// South, -y
    S,
    /// West, -x
    W,
}

impl Orientation {
    /// Clockwise order starting at north
    pub const CLOCKWISE: [Orientation; 4] = [Orientation::N, Orientation::E, Orientation::S, Orientation::W];

    fn index(self) -> usize {
        match self {
            Orientation::N => 0,
            Orientation::E => 1,
            Orientation::S => 2,
            Orientation::W => 3,
        }
    }

    /// One step counter-clockwise: N -> W -> S -> E -> N
    pub fn left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// One step clockwise: N -> E -> S -> W -> N
    pub fn right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Unit step `(dx, dy)` taken when moving forward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::N => (0, 1),
            Orientation::E => (1, 0),
            Orientation::S => (0, -1),
            Orientation::W => (-1, 0),
        }
    }

    /// The compass symbol
    pub fn symbol(self) -> char {
        match self {
            Orientation::N => 'N',
            Orientation::E => 'E',
            Orientation::S => 'S',
            Orientation::W => 'W',
        }
    }

    /// Case-insensitive lookup used for typed user input
    pub fn from_input(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c.to_ascii_uppercase()).ok(),
            _ => None,
        }
    }
}

/// Strict conversion: only the upper-case symbols are accepted
impl TryFrom<char> for Orientation {
    type Error = RobonavError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'N' => Ok(Orientation::N),
            'E' => Ok(Orientation::E),
            'S' => Ok(Orientation::S),
            'W' => Ok(Orientation::W),
            other => Err(RobonavError::InvalidOrientation(other)),
        }
    }
}

/// Strict parse of a single upper-case symbol
///
/// Anything that is not exactly one character reports
/// [`char::REPLACEMENT_CHARACTER`] as the offending orientation.
impl FromStr for Orientation {
    type Err = RobonavError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(RobonavError::InvalidOrientation(char::REPLACEMENT_CHARACTER)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single robot instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn counter-clockwise (`L`)
    Left,
    /// Turn clockwise (`R`)
    Right,
    /// Move one unit forward (`F`)
    Forward,
}

impl Command {
    /// Map a command character; anything unrecognised is `None`
    pub fn parse(c: char) -> Option<Self> {
        match c {
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            'F' => Some(Command::Forward),
            _ => None,
        }
    }
}
