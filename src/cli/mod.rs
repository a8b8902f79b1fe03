//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the report store.

pub mod show;

pub use show::{handle_show_command, OutputFormat, ShowArgs};
