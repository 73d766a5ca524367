//! Robonav interactive setup
//!
//! Prompt/validate/confirm loops that turn operator input into a confirmed
//! room and robot.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod confirm;
pub mod flow;
pub mod input;

pub use confirm::{ask_yes_no, parse_yes_no, should_confirm_before_continue};
pub use flow::{Setup, SetupFlow};
pub use input::{InputPort, ScriptedInput};
