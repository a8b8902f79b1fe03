//! backup-dash - Terminal dashboard for daily backup reports
//!
//! This library provides the core functionality behind `backupdash`: fetching
//! the per-day JSON report of backup notification messages, classifying each
//! entry by the status its sender reported, and presenting the day grouped by
//! category, either interactively or as a one-shot printout.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Report entries, categories and per-day reports
//! - `source`: Where reports come from (HTTP or a local directory)
//! - `store`: Selected date, loaded report and background loading
//! - `display` / `export`: Table, JSON and CSV output
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use backup_dash::config::{DashPaths, Settings};
//! use backup_dash::store::{LocalClock, ReportStore};
//!
//! let paths = DashPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = ReportStore::new(backup_dash::source::from_settings(&settings), LocalClock);
//! store.initialize();
//! store.wait(settings.fetch_timeout());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod source;
pub mod store;
pub mod tui;

pub use error::{DashError, DashResult, ReportUnavailable};
