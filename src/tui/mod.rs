//! Terminal User Interface module
//!
//! This module provides the interactive dashboard using ratatui: a date
//! header, one column per status category and a detail dialog per entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
