//! The `show` command
//!
//! Fetches one day's report synchronously and prints it grouped by category.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tracing::info;

use crate::display::{format_entry_detail, format_report};
use crate::error::{DashError, DashResult};
use crate::export::{export_report_csv, export_report_json, GroupedReport};
use crate::store::ReportStore;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One table per category
    Table,
    /// Grouped report as JSON
    Json,
    /// One row per entry, tagged with its category
    Csv,
}

/// Arguments of the `show` command
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Report date (YYYY-MM-DD), defaults to yesterday
    #[arg(short, long)]
    pub date: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print the full message of one client instead of the grouped report
    #[arg(short, long)]
    pub client: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `show` command
///
/// An unavailable report is not an error: the empty grouping is printed with
/// the failure flagged, and the store's warning reaches stderr through the
/// console log layer.
pub fn handle_show_command(
    store: &mut ReportStore,
    args: ShowArgs,
    wait: Duration,
) -> DashResult<()> {
    match args.date.as_deref() {
        Some(raw) => {
            let date = parse_date(raw)?;
            if !store.go_to(date) {
                return Err(DashError::Validation(format!(
                    "{} is in the future (today is {})",
                    date,
                    store.today()
                )));
            }
        }
        None => store.initialize(),
    }

    // A failure is logged by the store and flagged in the output itself
    store.wait(wait);

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                DashError::Output(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_show(store, args.format, args.client.as_deref(), &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_show(store, args.format, args.client.as_deref(), &mut writer)?;
        }
    }

    Ok(())
}

/// Render the loaded report in the requested format
pub fn write_show<W: Write>(
    store: &mut ReportStore,
    format: OutputFormat,
    client: Option<&str>,
    writer: &mut W,
) -> DashResult<()> {
    if let Some(client) = client {
        if !store.select_client(client) {
            return Err(DashError::Validation(format!(
                "No entry for client '{}' on {}",
                client,
                store.selected_date()
            )));
        }
        if let Some(entry) = store.selected_entry() {
            write!(writer, "{}", format_entry_detail(entry))?;
        }
        return Ok(());
    }

    let date = store.selected_date();
    let buckets = store.grouped();
    match format {
        OutputFormat::Table => {
            write!(writer, "{}", format_report(date, &buckets, store.load_error()))?;
        }
        OutputFormat::Json => {
            let report = GroupedReport::new(date, store.load_error().is_some(), &buckets);
            export_report_json(&report, writer)?;
        }
        OutputFormat::Csv => export_report_csv(&buckets, writer)?,
    }
    Ok(())
}

fn parse_date(raw: &str) -> DashResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        DashError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportUnavailable;
    use crate::models::entry::epoch;
    use crate::models::ReportEntry;
    use crate::source::ReportSource;
    use crate::store::FixedClock;
    use std::sync::Arc;

    struct OneEntrySource;

    impl ReportSource for OneEntrySource {
        fn fetch(&self, date: NaiveDate) -> Result<Vec<ReportEntry>, ReportUnavailable> {
            if date == NaiveDate::from_ymd_opt(2024, 3, 10).unwrap() {
                Ok(vec![
                    ReportEntry::new("alpha", Some("ok"), epoch()).with_content("Backup OK", "all good")
                ])
            } else {
                Err(ReportUnavailable::Status(404))
            }
        }

        fn location(&self, date: NaiveDate) -> String {
            date.to_string()
        }
    }

    fn store() -> ReportStore {
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        ReportStore::new(Arc::new(OneEntrySource), FixedClock(today))
    }

    fn args(date: &str, format: OutputFormat) -> ShowArgs {
        ShowArgs {
            date: Some(date.to_string()),
            format,
            client: None,
            output: None,
        }
    }

    fn loaded(date: &str) -> ReportStore {
        let mut store = store();
        assert!(store.go_to(parse_date(date).unwrap()));
        assert!(store.wait(Duration::from_secs(5)));
        store
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-03-10 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert!(parse_date("10/03/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_future_date_rejected() {
        let mut store = store();
        let err = handle_show_command(
            &mut store,
            args("2024-03-13", OutputFormat::Table),
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.requests_issued(), 0);
    }

    #[test]
    fn test_write_json() {
        let mut store = loaded("2024-03-10");
        let mut out = Vec::new();
        write_show(&mut store, OutputFormat::Json, None, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["date"], "2024-03-10");
        assert_eq!(value["load_error"], false);
        assert_eq!(value["categories"]["OK"][0]["client"], "alpha");
        assert_eq!(value["categories"]["NOK"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_missing_report_prints_empty_grouping() {
        let mut store = loaded("2024-03-09");
        let mut out = Vec::new();
        write_show(&mut store, OutputFormat::Table, None, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("OK (0)"));
        assert!(text.contains("Inconnu (0)"));
    }

    #[test]
    fn test_client_detail() {
        let mut store = loaded("2024-03-10");
        let mut out = Vec::new();
        write_show(&mut store, OutputFormat::Table, Some("alpha"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Subject: Backup OK"));
        assert!(text.contains("all good"));

        let err = write_show(&mut store, OutputFormat::Table, Some("beta"), &mut Vec::new())
            .unwrap_err();
        assert!(err.is_validation());
    }
}
