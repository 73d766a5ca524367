//! Robonav command-line interface and main binary
//!
//! Console collaborators, argument parsing and the program flow driven by the
//! `robonav` binary.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod app;
pub mod args;
pub mod console;
pub mod session;

pub use app::{conclude, ExitStatus, Outcome, RobonavApp};
pub use args::Cli;
pub use console::{ConsoleInput, ConsoleReporter};
