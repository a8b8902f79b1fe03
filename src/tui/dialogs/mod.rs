//! Dialog module
//!
//! Overlays drawn on top of the dashboard.

pub mod detail;
pub mod help;
