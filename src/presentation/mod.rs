//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Plain-text formatting of command results
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `output` - Text renderers shared by the commands

pub mod cli;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
