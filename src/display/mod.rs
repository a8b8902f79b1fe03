//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports for the one-shot `show` command.

pub mod report;

pub use report::{format_entry_detail, format_report, truncate};
