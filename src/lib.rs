pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod container;
pub mod dispatch;
pub mod error;
pub mod inspector;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{InspectorError, Result};
pub use inspector::{InspectOptions, Inspector};

/// Inspection finished, whatever the findings.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
