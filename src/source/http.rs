//! Remote report source over HTTP

use std::io::{self, Read};
use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use super::{expand_location, parse_report, ReportSource};
use crate::error::ReportUnavailable;
use crate::models::ReportEntry;

/// Fetches reports with a `GET` on a date-templated URL
pub struct HttpSource {
    template: String,
    agent: ureq::Agent,
    max_bytes: usize,
}

impl HttpSource {
    /// Create a source; `timeout` bounds the whole request
    pub fn new(template: impl Into<String>, timeout: Duration, max_bytes: usize) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout(timeout)
            .build();
        Self {
            template: template.into(),
            agent,
            max_bytes,
        }
    }
}

impl ReportSource for HttpSource {
    fn fetch(&self, date: NaiveDate) -> Result<Vec<ReportEntry>, ReportUnavailable> {
        let url = self.location(date);
        debug!(%url, "fetching report");

        let response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => ReportUnavailable::Status(code),
            ureq::Error::Transport(transport) => ReportUnavailable::Network(transport.to_string()),
        })?;

        let body = read_response_bytes(response, self.max_bytes)?;
        parse_report(&body)
    }

    fn location(&self, date: NaiveDate) -> String {
        expand_location(&self.template, date)
    }
}

/// Read a response into memory, enforcing a maximum byte size
fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, ReportUnavailable> {
    let declared = response
        .header("Content-Length")
        .and_then(|length| length.parse::<u64>().ok());
    if declared.is_some_and(|length| length > max_bytes as u64) {
        return Err(ReportUnavailable::TooLarge { limit: max_bytes });
    }

    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited
        .read_to_end(&mut bytes)
        .map_err(|e: io::Error| ReportUnavailable::Network(e.to_string()))?;
    if bytes.len() > max_bytes {
        return Err(ReportUnavailable::TooLarge { limit: max_bytes });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn ok_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        )
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn source(base: &str) -> HttpSource {
        HttpSource::new(base, Duration::from_secs(5), 1024)
    }

    #[test]
    fn fetch_parses_entries() {
        let body = r#"[
            {"client": "a", "status": "Terminé", "subject": "s", "body": "b", "date": "2024-03-10T01:00:00Z"},
            {"client": "b", "status": null, "subject": "s", "body": "b", "date": "2024-03-10T02:00:00Z", "mailLink": "https://m/1"}
        ]"#;
        let base = serve_once(ok_response(body));

        let entries = source(&base).fetch(day()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].mail_link.as_deref(), Some("https://m/1"));
    }

    #[test]
    fn fetch_maps_not_found_to_status() {
        let base = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".into());
        let err = source(&base).fetch(day()).unwrap_err();
        assert_eq!(err, ReportUnavailable::Status(404));
    }

    #[test]
    fn fetch_rejects_malformed_body() {
        let base = serve_once(ok_response("<html>oops</html>"));
        let err = source(&base).fetch(day()).unwrap_err();
        assert!(matches!(err, ReportUnavailable::Malformed(_)));
    }

    #[test]
    fn fetch_rejects_oversized_body() {
        let body = format!("[{}]", " ".repeat(2048));
        let base = serve_once(ok_response(&body));
        let err = source(&base).fetch(day()).unwrap_err();
        assert_eq!(err, ReportUnavailable::TooLarge { limit: 1024 });
    }

    #[test]
    fn fetch_reports_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(&format!("http://{}", addr)).fetch(day()).unwrap_err();
        assert!(matches!(err, ReportUnavailable::Network(_)));
    }

    #[test]
    fn location_uses_template() {
        let source = source("http://reports.local/{date}.json");
        assert_eq!(source.location(day()), "http://reports.local/2024-03-10.json");
    }
}
