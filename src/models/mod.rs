//! Core data models for backup-dash
//!
//! This module contains the data structures of the backup report domain:
//! report entries, derived status categories and the per-day report.

pub mod category;
pub mod entry;
pub mod report;

pub use category::{categorize, Category};
pub use entry::ReportEntry;
pub use report::{group_by_category, CategoryBuckets, Report};
