//! Interactive room and robot setup
//!
//! Both acquisitions follow the same shape: one combined prompt, individual
//! re-prompts for each field that failed validation, then an optional Y/N
//! review. Declining the review discards every field and starts over from the
//! combined prompt.

use crate::confirm::ask_yes_no;
use crate::input::InputPort;
use robonav_core::{Reporter, Result, Severity};
use robonav_world::validation::{check_dimension, check_orientation, check_position};
use robonav_world::{Axis, Orientation, Robot, Room, ROOM_CONSTRAINTS};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// A confirmed room and the robot placed in it
#[derive(Debug, Clone)]
pub struct Setup {
    /// The room, shared with the robot
    pub room: Arc<Room>,
    /// The robot bounded by `room`
    pub robot: Robot,
}

/// Drives the prompt/validate/confirm cycles for one session
pub struct SetupFlow<'a, I: InputPort> {
    input: &'a mut I,
    reporter: &'a dyn Reporter,
    confirm: bool,
}

impl<'a, I: InputPort> SetupFlow<'a, I> {
    /// Create a flow. With `confirm` off the first valid values are accepted
    /// without review.
    pub fn new(input: &'a mut I, reporter: &'a dyn Reporter, confirm: bool) -> Self {
        Self {
            input,
            reporter,
            confirm,
        }
    }

    /// Acquire a room, then a robot inside it
    #[instrument(name = "setup_run", skip_all, fields(confirm = self.confirm))]
    pub async fn run(mut self) -> Result<Setup> {
        let room = Arc::new(self.acquire_room().await?);
        let robot = self.acquire_robot(Arc::clone(&room)).await?;
        info!(subsystem = "setup", room = %room, robot = %robot, "Setup complete");
        Ok(Setup { room, robot })
    }

    /// Prompt until the operator settles on valid room dimensions
    pub async fn acquire_room(&mut self) -> Result<Room> {
        loop {
            let line = self
                .input
                .request_line("Enter room dimensions (width height): ")
                .await?;
            let mut tokens = line.split_whitespace().map(str::to_owned);
            let width_token = tokens.next();
            let height_token = tokens.next();

            let width = self.settle_dimension(width_token, Axis::Width).await?;
            let height = self.settle_dimension(height_token, Axis::Height).await?;

            let accepted = self
                .review(
                    &[
                        "Room dimensions".to_string(),
                        format!("Width: {}, Height: {}", width, height),
                    ],
                    "Confirm room dimensions (Y / N): ",
                    "Please enter Y or N to confirm or decline room dimensions.",
                )
                .await?;

            if accepted {
                return Room::new(width, height);
            }
            debug!(subsystem = "setup", width, height, "Room dimensions declined");
        }
    }

    /// Prompt until the operator settles on a valid robot placement in `room`
    pub async fn acquire_robot(&mut self, room: Arc<Room>) -> Result<Robot> {
        loop {
            let line = self
                .input
                .request_line("Enter starting position and orientation (x y orientation): ")
                .await?;
            let mut tokens = line.split_whitespace().map(str::to_owned);
            let x_token = tokens.next();
            let y_token = tokens.next();
            let orientation_token = tokens.next();

            let x = self.settle_position(x_token, room.width(), "x").await?;
            let y = self.settle_position(y_token, room.height(), "y").await?;
            let orientation = self.settle_orientation(orientation_token).await?;

            let accepted = self
                .review(
                    &[
                        "Robot Position and Orientation".to_string(),
                        format!("x: {}, y: {}, Orientation: {}", x, y, orientation),
                    ],
                    "Confirm robot position and orientation (Y / N): ",
                    "Please enter Y or N to confirm or decline robot position and orientation.",
                )
                .await?;

            if accepted {
                return Robot::place(x, y, orientation, room);
            }
            debug!(subsystem = "setup", x, y, orientation = %orientation, "Robot placement declined");
        }
    }

    async fn settle_dimension(&mut self, mut token: Option<String>, axis: Axis) -> Result<i32> {
        let constraint = *ROOM_CONSTRAINTS.axis(axis);
        loop {
            if let Some(value) = check_dimension(token.as_deref(), axis.name(), self.reporter)? {
                return Ok(value);
            }
            let prompt = format!("Enter {} ({}-{}): ", axis, constraint.min, constraint.max);
            token = Some(self.input.request_line(&prompt).await?);
        }
    }

    async fn settle_position(&mut self, mut token: Option<String>, max: i32, axis: &str) -> Result<i32> {
        loop {
            if let Some(value) = check_position(token.as_deref(), max, axis, self.reporter) {
                return Ok(value);
            }
            let prompt = format!("Enter starting position on the {}-axis between 0 and {}: ", axis, max);
            token = Some(self.input.request_line(&prompt).await?);
        }
    }

    async fn settle_orientation(&mut self, mut token: Option<String>) -> Result<Orientation> {
        loop {
            if let Some(orientation) = check_orientation(token.as_deref(), self.reporter) {
                return Ok(orientation);
            }
            token = Some(
                self.input
                    .request_line("Please provide a valid orientation (N / E / S / W): ")
                    .await?,
            );
        }
    }

    /// Show `summary` and ask for approval; always approves when review is off
    async fn review(&mut self, summary: &[String], question: &str, retry_hint: &str) -> Result<bool> {
        if !self.confirm {
            return Ok(true);
        }
        self.reporter.report(summary, Severity::Success);
        ask_yes_no(&mut *self.input, self.reporter, question, retry_hint).await
    }
}
