//! Local report source
//!
//! Reads `rapport_<date>.json` files from a directory, the static deployment
//! of the dashboard.

use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use super::{expand_location, parse_report, ReportSource};
use crate::error::ReportUnavailable;
use crate::models::ReportEntry;

/// Reads daily reports from the local filesystem
pub struct DirectorySource {
    template: String,
    max_bytes: usize,
}

impl DirectorySource {
    /// Create a source rooted at a directory (or a `{date}` path template)
    pub fn new(template: impl Into<String>, max_bytes: usize) -> Self {
        Self {
            template: template.into(),
            max_bytes,
        }
    }

    /// Path of the report file for a day
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        PathBuf::from(expand_location(&self.template, date))
    }
}

impl ReportSource for DirectorySource {
    fn fetch(&self, date: NaiveDate) -> Result<Vec<ReportEntry>, ReportUnavailable> {
        let path = self.path_for(date);
        debug!(path = %path.display(), "reading report");

        let file = std::fs::File::open(&path).map_err(|e| {
            ReportUnavailable::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut bytes = Vec::new();
        file.take(self.max_bytes as u64 + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| {
                ReportUnavailable::Io(format!("Failed to read {}: {}", path.display(), e))
            })?;
        if bytes.len() > self.max_bytes {
            return Err(ReportUnavailable::TooLarge {
                limit: self.max_bytes,
            });
        }

        parse_report(&bytes)
    }

    fn location(&self, date: NaiveDate) -> String {
        self.path_for(date).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn source_in(dir: &TempDir) -> DirectorySource {
        DirectorySource::new(dir.path().to_string_lossy(), 4096)
    }

    #[test]
    fn test_reads_report_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("rapport_2024-03-10.json"),
            r#"[{"client": "srv-01", "status": "Échec", "subject": "x", "body": "y", "date": "2024-03-10T03:00:00+01:00"}]"#,
        )
        .unwrap();

        let entries = source_in(&dir).fetch(day()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].client, "srv-01");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = source_in(&dir).fetch(day()).unwrap_err();
        assert!(matches!(err, ReportUnavailable::Io(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("rapport_2024-03-10.json"), "[{").unwrap();
        let err = source_in(&dir).fetch(day()).unwrap_err();
        assert!(matches!(err, ReportUnavailable::Malformed(_)));
    }

    #[test]
    fn test_oversized_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("rapport_2024-03-10.json"),
            format!("[{}]", " ".repeat(5000)),
        )
        .unwrap();
        let err = source_in(&dir).fetch(day()).unwrap_err();
        assert_eq!(err, ReportUnavailable::TooLarge { limit: 4096 });
    }

    #[test]
    fn test_path_template() {
        let source = DirectorySource::new("/srv/backups/{date}/report.json", 10);
        assert_eq!(
            source.path_for(day()),
            PathBuf::from("/srv/backups/2024-03-10/report.json")
        );
    }
}
