//! JSON export of a grouped report

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::DashResult;
use crate::models::CategoryBuckets;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable view of a grouped report
#[derive(Debug, Serialize)]
pub struct GroupedReport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// The day the report covers
    pub date: NaiveDate,

    /// Whether the report could not be fetched
    pub load_error: bool,

    /// Entries keyed by category, always four keys
    pub categories: &'a CategoryBuckets<'a>,
}

impl<'a> GroupedReport<'a> {
    /// Wrap a report's buckets for export
    pub fn new(date: NaiveDate, load_error: bool, categories: &'a CategoryBuckets<'a>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            date,
            load_error,
            categories,
        }
    }
}

/// Write a grouped report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &GroupedReport<'_>, writer: &mut W) -> DashResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
