//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::error::{ConfigurationError, TranslationError, ValidationError};

/// Maps a failed command to a process exit code.
///
/// Configuration problems exit with `EX_CONFIG`, failed round-trips with
/// `EX_UNAVAILABLE`, rejected input with `EX_USAGE`; anything else with 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigurationError>().is_some() {
        exitcode::CONFIG
    } else if err.downcast_ref::<TranslationError>().is_some() {
        exitcode::UNAVAILABLE
    } else if err.downcast_ref::<ValidationError>().is_some() {
        exitcode::USAGE
    } else {
        1
    }
}
