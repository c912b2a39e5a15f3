//! Shadowing CLI library
//!
//! This library provides the command-line interface for the shadowing
//! turn segmentation and scoring core.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
