//! Codefence CLI library
//!
//! This library provides the command-line interface for the codefence
//! code-block detection system.

pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
