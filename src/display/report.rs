//! Report formatting for terminal output
//!
//! Prints the four category sections of a daily report as tables.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::ReportUnavailable;
use crate::models::{CategoryBuckets, ReportEntry};

/// Placeholder shown for an empty category
pub const EMPTY_MARKER: &str = "—";

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Subject")]
    subject: String,
}

impl From<&ReportEntry> for EntryRow {
    fn from(entry: &ReportEntry) -> Self {
        Self {
            client: entry.client.clone(),
            time: entry.local_time(),
            status: entry.status_label().to_string(),
            subject: truncate(&entry.subject, 60),
        }
    }
}

/// Format a grouped report as one table per category
pub fn format_report(
    date: NaiveDate,
    buckets: &CategoryBuckets<'_>,
    load_error: Option<&ReportUnavailable>,
) -> String {
    let mut output = format!("Rapport de sauvegarde du {}\n", date.format("%Y-%m-%d"));
    if let Some(err) = load_error {
        output.push_str(&format!("(report unavailable: {})\n", err));
    }

    for (category, entries) in buckets.iter() {
        output.push('\n');
        output.push_str(&format!("{} ({})\n", category.label(), entries.len()));

        if entries.is_empty() {
            output.push_str(&format!("  {}\n", EMPTY_MARKER));
            continue;
        }

        let rows: Vec<EntryRow> = entries.iter().map(|e| EntryRow::from(*e)).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output
}

/// Format one entry in full, for the detail view
pub fn format_entry_detail(entry: &ReportEntry) -> String {
    let mut output = String::new();
    output.push_str(&format!("Client:  {}\n", entry.client));
    output.push_str(&format!("Status:  {} ({})\n", entry.status_label(), entry.category()));
    output.push_str(&format!("Time:    {}\n", entry.local_time()));
    if let Some(link) = &entry.mail_link {
        output.push_str(&format!("Mail:    {}\n", link));
    }
    output.push_str(&format!("Subject: {}\n\n", entry.subject));
    output.push_str(&entry.body);
    output.push('\n');
    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
