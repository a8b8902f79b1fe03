//! Report sources
//!
//! A source turns a calendar date into the entries of that day's report. The
//! same dashboard runs against a remote document URL or a local directory of
//! `rapport_<date>.json` files; which one is used is a configuration detail.

pub mod directory;
pub mod http;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::ReportUnavailable;
use crate::models::ReportEntry;

pub use directory::DirectorySource;
pub use http::HttpSource;

/// Placeholder replaced with the ISO date in a source location
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Fetches the report for one day
pub trait ReportSource: Send + Sync {
    /// Fetch and parse the report for `date`
    fn fetch(&self, date: NaiveDate) -> Result<Vec<ReportEntry>, ReportUnavailable>;

    /// Human-readable location of the report for `date`
    fn location(&self, date: NaiveDate) -> String;
}

/// File name of the report for a day when no template is given
pub fn report_file_name(date: NaiveDate) -> String {
    format!("rapport_{}.json", date.format("%Y-%m-%d"))
}

/// Expand a location template for a day
///
/// `{date}` is replaced with the ISO date. Without a placeholder the default
/// report file name is appended as a path segment.
pub fn expand_location(template: &str, date: NaiveDate) -> String {
    if template.contains(DATE_PLACEHOLDER) {
        template.replace(DATE_PLACEHOLDER, &date.format("%Y-%m-%d").to_string())
    } else {
        format!(
            "{}/{}",
            template.trim_end_matches('/'),
            report_file_name(date)
        )
    }
}

/// Check if a location refers to a remote document
pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Parse a report body into entries
pub fn parse_report(body: &[u8]) -> Result<Vec<ReportEntry>, ReportUnavailable> {
    Ok(serde_json::from_slice(body)?)
}

/// Build the source described by the settings
pub fn from_settings(settings: &Settings) -> Arc<dyn ReportSource> {
    if is_remote(&settings.source) {
        Arc::new(HttpSource::new(
            settings.source.clone(),
            settings.fetch_timeout(),
            settings.max_report_bytes,
        ))
    } else {
        Arc::new(DirectorySource::new(
            settings.source.clone(),
            settings.max_report_bytes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_expand_appends_file_name() {
        assert_eq!(
            expand_location("https://reports.example.com/daily/", day()),
            "https://reports.example.com/daily/rapport_2024-03-10.json"
        );
        assert_eq!(
            expand_location("./rapports", day()),
            "./rapports/rapport_2024-03-10.json"
        );
    }

    #[test]
    fn test_expand_template() {
        assert_eq!(
            expand_location("https://db.example.com/reports/{date}?format=json", day()),
            "https://db.example.com/reports/2024-03-10?format=json"
        );
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://localhost:8080"));
        assert!(is_remote("HTTPS://example.com"));
        assert!(!is_remote("/srv/rapports"));
        assert!(!is_remote("rapports/http"));
    }

    #[test]
    fn test_parse_report() {
        let body = br#"[{"client": "a", "status": "ok", "subject": "s", "body": "b", "date": "2024-03-10T01:00:00Z"}]"#;
        let entries = parse_report(body).unwrap();
        assert_eq!(entries.len(), 1);

        assert!(matches!(
            parse_report(b"{\"client\": \"a\"}"),
            Err(ReportUnavailable::Malformed(_))
        ));
        assert!(matches!(
            parse_report(b"<html>"),
            Err(ReportUnavailable::Malformed(_))
        ));
    }

    #[test]
    fn test_from_settings_picks_source() {
        let settings = Settings {
            source: "https://example.com/r".into(),
            ..Settings::default()
        };
        let source = from_settings(&settings);
        assert_eq!(
            source.location(day()),
            "https://example.com/r/rapport_2024-03-10.json"
        );

        let settings = Settings {
            source: "/srv/rapports".into(),
            ..Settings::default()
        };
        let source = from_settings(&settings);
        assert!(source.location(day()).ends_with("rapport_2024-03-10.json"));
    }
}
