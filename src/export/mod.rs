//! Export module for backup-dash
//!
//! Machine-readable renderings of a grouped daily report:
//! - JSON: one object keyed by category
//! - CSV: one row per entry, spreadsheet-compatible

pub mod csv;
pub mod json;

pub use self::csv::export_report_csv;
pub use self::json::{export_report_json, GroupedReport, EXPORT_SCHEMA_VERSION};
