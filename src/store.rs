//! Report store
//!
//! The store owns the selected date and the report loaded for it. All state
//! changes go through its operations: navigation, loading and selection.
//! Rendering code only reads it.
//!
//! Loads run on a worker thread and report back over a channel, so the UI
//! loop never blocks on the network. Each load is tagged with a token; only
//! the completion carrying the latest token is applied, which keeps a slow
//! response for a previous day from overwriting the current one.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::ReportUnavailable;
use crate::models::{CategoryBuckets, Report, ReportEntry};
use crate::source::ReportSource;

/// Source of "today"
pub trait Clock: Send + Sync {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock stuck on one day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Where the current report stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch for the selected date is in flight
    Loading,
    /// The report for the selected date was fetched
    Loaded,
    /// The report could not be obtained; entries are empty
    Failed(ReportUnavailable),
}

/// Result of draining finished loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollOutcome {
    /// The latest load completed and its result was applied
    pub applied: bool,
    /// Completions dropped because a newer load was issued
    pub discarded: usize,
}

impl PollOutcome {
    /// Number of completions received
    pub fn received(&self) -> usize {
        self.discarded + usize::from(self.applied)
    }
}

struct LoadOutcome {
    token: u64,
    date: NaiveDate,
    result: Result<Vec<ReportEntry>, ReportUnavailable>,
}

/// Owns the selected date, its report and the entry selection
pub struct ReportStore {
    source: Arc<dyn ReportSource>,
    clock: Box<dyn Clock>,
    report: Report,
    load_state: LoadState,
    selection: Option<usize>,
    latest_token: u64,
    requests: u64,
    sender: mpsc::Sender<LoadOutcome>,
    receiver: mpsc::Receiver<LoadOutcome>,
}

impl ReportStore {
    /// Create a store positioned on yesterday, without loading anything
    pub fn new(source: Arc<dyn ReportSource>, clock: impl Clock + 'static) -> Self {
        let (sender, receiver) = mpsc::channel();
        let yesterday = yesterday(clock.today());
        Self {
            source,
            clock: Box::new(clock),
            report: Report::empty(yesterday),
            load_state: LoadState::Idle,
            selection: None,
            latest_token: 0,
            requests: 0,
            sender,
            receiver,
        }
    }

    /// Select yesterday and start loading its report
    pub fn initialize(&mut self) {
        let date = yesterday(self.clock.today());
        self.load(date);
    }

    /// The selected date
    pub fn selected_date(&self) -> NaiveDate {
        self.report.date
    }

    /// Today according to the store's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Entries of the selected date's report
    pub fn entries(&self) -> &[ReportEntry] {
        &self.report.entries
    }

    /// The report for the selected date
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Entries grouped into the four categories
    pub fn grouped(&self) -> CategoryBuckets<'_> {
        self.report.grouped()
    }

    /// Current load state
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Check if the last load for the selected date failed
    pub fn load_error(&self) -> Option<&ReportUnavailable> {
        match &self.load_state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Check if a load is in flight
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Number of loads issued so far
    pub fn requests_issued(&self) -> u64 {
        self.requests
    }

    /// Location of the selected date's report
    pub fn location(&self) -> String {
        self.source.location(self.report.date)
    }

    /// Check if stepping one day forward is allowed
    pub fn can_navigate_forward(&self) -> bool {
        self.report.date < self.clock.today()
    }

    /// Move the selected date by `delta_days` calendar days
    ///
    /// Moving past today is rejected and leaves the store untouched. Returns
    /// whether the move was accepted.
    pub fn navigate(&mut self, delta_days: i64) -> bool {
        match shift(self.report.date, delta_days) {
            Some(date) => self.go_to(date),
            None => {
                debug!(delta_days, "navigation out of calendar range");
                false
            }
        }
    }

    /// Jump to a specific date
    ///
    /// Dates after today are rejected. Returns whether the jump was accepted.
    pub fn go_to(&mut self, date: NaiveDate) -> bool {
        let today = self.clock.today();
        if date > today {
            debug!(%date, %today, "refusing to navigate into the future");
            return false;
        }
        self.load(date);
        true
    }

    /// Fetch the selected date's report again
    pub fn reload(&mut self) {
        self.load(self.report.date);
    }

    /// Select the entry at `position` in the current report
    ///
    /// Replaces any previous selection. Returns false if there is no entry at
    /// that position.
    pub fn select_entry(&mut self, position: usize) -> bool {
        if position >= self.report.entries.len() {
            return false;
        }
        self.selection = Some(position);
        true
    }

    /// Select the first entry of the current report with this client
    pub fn select_client(&mut self, client: &str) -> bool {
        match self.report.position_of_client(client) {
            Some(position) => self.select_entry(position),
            None => false,
        }
    }

    /// Clear the entry selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selected entry, if any
    pub fn selected_entry(&self) -> Option<&ReportEntry> {
        self.selection
            .and_then(|position| self.report.entries.get(position))
    }

    /// Apply finished loads without blocking
    pub fn poll(&mut self) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        while let Ok(completion) = self.receiver.try_recv() {
            self.receive(completion, &mut outcome);
        }
        outcome
    }

    /// Block until the latest load is applied or `timeout` elapses
    ///
    /// Returns true if the store is no longer loading. Expiry is recorded as a
    /// network failure for the selected date: entries are emptied and the
    /// answer, should it still arrive, is discarded.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(completion) => {
                    let mut outcome = PollOutcome::default();
                    self.receive(completion, &mut outcome);
                }
                Err(_) => {
                    // Retire the in-flight token so a late answer is treated as stale
                    self.latest_token += 1;
                    self.apply(
                        self.report.date,
                        Err(ReportUnavailable::Network("timed out".into())),
                    );
                    return false;
                }
            }
        }
        true
    }

    fn load(&mut self, date: NaiveDate) {
        if date != self.report.date {
            self.report = Report::empty(date);
            self.selection = None;
        }
        self.latest_token += 1;
        self.requests += 1;
        self.load_state = LoadState::Loading;

        let token = self.latest_token;
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        debug!(%date, token, location = %source.location(date), "loading report");

        thread::spawn(move || {
            let result = source.fetch(date);
            // The store may be gone by now; nothing left to update then.
            let _ = sender.send(LoadOutcome {
                token,
                date,
                result,
            });
        });
    }

    fn receive(&mut self, completion: LoadOutcome, outcome: &mut PollOutcome) {
        if completion.token != self.latest_token {
            debug!(
                date = %completion.date,
                token = completion.token,
                latest = self.latest_token,
                "discarding stale report"
            );
            outcome.discarded += 1;
            return;
        }
        self.apply(completion.date, completion.result);
        outcome.applied = true;
    }

    fn apply(&mut self, date: NaiveDate, result: Result<Vec<ReportEntry>, ReportUnavailable>) {
        let selected_client = self.selected_entry().map(|entry| entry.client.clone());
        match result {
            Ok(entries) => {
                let report = Report::new(date, entries);
                let counts = report.grouped().counts();
                info!(
                    %date,
                    ok = counts[0],
                    nok = counts[1],
                    error = counts[2],
                    unknown = counts[3],
                    "report loaded"
                );
                for client in report.duplicate_clients() {
                    warn!(%date, client, "client appears more than once in report");
                }
                self.report = report;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                warn!(%date, error = %err, "report unavailable");
                self.report = Report::empty(date);
                self.load_state = LoadState::Failed(err);
            }
        }

        // A reload keeps the selection on the same entry when it is still there
        let previous = self.selection;
        self.selection = selected_client.and_then(|client| {
            let same_position = previous.filter(|&position| {
                self.report
                    .entries
                    .get(position)
                    .is_some_and(|entry| entry.client == client)
            });
            same_position.or_else(|| self.report.position_of_client(&client))
        });
    }
}

fn yesterday(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

/// Calendar arithmetic on dates; None when out of range
fn shift(date: NaiveDate, delta_days: i64) -> Option<NaiveDate> {
    if delta_days >= 0 {
        date.checked_add_days(Days::new(delta_days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(delta_days.unsigned_abs()))
    }
}
