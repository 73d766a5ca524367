//! Fixed room dimension constraints

use robonav_core::{RobonavError, Result};
use std::fmt;
use std::str::FromStr;

/// Smallest accepted room width
pub const MIN_WIDTH: i32 = 2;
/// Smallest accepted room height
pub const MIN_HEIGHT: i32 = 2;
/// Largest accepted room width
pub const MAX_WIDTH: i32 = 20;
/// Largest accepted room height
pub const MAX_HEIGHT: i32 = 20;

/// Inclusive bounds for one room axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionConstraint {
    /// Smallest accepted value
    pub min: i32,
    /// Largest accepted value
    pub max: i32,
}

impl DimensionConstraint {
    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Constraints for both room axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomConstraints {
    /// Width bounds
    pub width: DimensionConstraint,
    /// Height bounds
    pub height: DimensionConstraint,
}

/// The constraints every room must satisfy
pub const ROOM_CONSTRAINTS: RoomConstraints = RoomConstraints {
    width: DimensionConstraint {
        min: MIN_WIDTH,
        max: MAX_WIDTH,
    },
    height: DimensionConstraint {
        min: MIN_HEIGHT,
        max: MAX_HEIGHT,
    },
};

impl RoomConstraints {
    /// Constraint for an axis
    pub fn axis(&self, axis: Axis) -> &DimensionConstraint {
        match axis {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }

    /// Constraint for an axis given by name.
    ///
    /// An unknown name is an internal defect, so it is an error rather than a
    /// rejected input.
    pub fn for_axis_name(&self, name: &str) -> Result<&DimensionConstraint> {
        Ok(self.axis(name.parse()?))
    }

    /// Whether both dimensions are within their bounds
    pub fn admits(&self, width: i32, height: i32) -> bool {
        self.width.contains(width) && self.height.contains(height)
    }

    /// One line per axis, e.g. `Width: Min: 2, Max: 20`
    pub fn describe(&self) -> Vec<String> {
        Axis::ALL
            .iter()
            .map(|axis| {
                let c = self.axis(*axis);
                format!("{}: Min: {}, Max: {}", axis.title(), c.min, c.max)
            })
            .collect()
    }
}

/// One of the two room dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal extent
    Width,
    /// Vertical extent
    Height,
}

impl Axis {
    /// Both axes in prompt order
    pub const ALL: [Axis; 2] = [Axis::Width, Axis::Height];

    /// Lower-case name used in prompts and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Axis::Width => "Width",
            Axis::Height => "Height",
        }
    }
}

impl FromStr for Axis {
    type Err = RobonavError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "width" => Ok(Axis::Width),
            "height" => Ok(Axis::Height),
            other => Err(RobonavError::UnknownAxis(other.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
