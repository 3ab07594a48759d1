//! Keypad CLI Library
//!
//! Terminal front end for the keypad calculator engine.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

mod commands;
mod config;
mod error;
mod output;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, FormatArg, PressArgs, ReplArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Printer};
pub use session::Session;
