//! Robonav Core
//!
//! Shared error type, reporting contract and logging infrastructure for the
//! Robonav workspace.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod logging;
pub mod report;

pub use error::RobonavError;
pub use report::{Reporter, Severity};

/// Core result type for Robonav operations
pub type Result<T> = std::result::Result<T, RobonavError>;

/// Version information for Robonav
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
