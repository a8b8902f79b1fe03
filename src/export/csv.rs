//! CSV export of a grouped report
//!
//! One row per entry, in category display order.

use std::io::Write;

use crate::error::DashResult;
use crate::models::CategoryBuckets;

const HEADER: [&str; 6] = ["category", "client", "status", "date", "subject", "mail_link"];

/// Write a grouped report as CSV
pub fn export_report_csv<W: Write>(buckets: &CategoryBuckets<'_>, writer: &mut W) -> DashResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for (category, entries) in buckets.iter() {
        for entry in entries {
            let date = entry.date.to_rfc3339();
            csv_writer.write_record([
                category.key(),
                entry.client.as_str(),
                entry.status.as_deref().unwrap_or(""),
                date.as_str(),
                entry.subject.as_str(),
                entry.mail_link.as_deref().unwrap_or(""),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
