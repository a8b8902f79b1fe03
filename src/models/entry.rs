//! Report entry model
//!
//! One entry is one client's backup outcome for a given day, as published in
//! the daily `rapport_<date>.json` document.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;

/// A single backup outcome within a daily report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// Client identifier, unique within a day's report
    pub client: String,

    /// Free-text status label from the backup notification
    #[serde(default)]
    pub status: Option<String>,

    /// Notification subject
    #[serde(default)]
    pub subject: String,

    /// Notification body
    #[serde(default)]
    pub body: String,

    /// When the notification was emitted
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: DateTime<FixedOffset>,

    /// Link to the original mail, not owned by this system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_link: Option<String>,
}

impl ReportEntry {
    /// Create an entry with empty subject and body
    pub fn new(
        client: impl Into<String>,
        status: Option<&str>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            client: client.into(),
            status: status.map(str::to_string),
            subject: String::new(),
            body: String::new(),
            date,
            mail_link: None,
        }
    }

    /// Set the subject and body
    pub fn with_content(mut self, subject: impl Into<String>, body: impl Into<String>) -> Self {
        self.subject = subject.into();
        self.body = body.into();
        self
    }

    /// Set the mail link
    pub fn with_mail_link(mut self, link: impl Into<String>) -> Self {
        self.mail_link = Some(link.into());
        self
    }

    /// The derived category of this entry
    pub fn category(&self) -> Category {
        Category::from_status(self.status.as_deref())
    }

    /// Status label for display, `-` when absent
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("-")
    }

    /// Local time of day the notification was emitted
    pub fn local_time(&self) -> String {
        self.date.with_timezone(&Local).format("%H:%M:%S").to_string()
    }
}

/// Parse an RFC 3339 timestamp, reading offset-less timestamps as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

#[cfg(test)]
pub(crate) fn epoch() -> DateTime<FixedOffset> {
    DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset()
}
