//! Application state for the TUI
//!
//! The App struct holds the report store plus the cursor and dialog state
//! needed for rendering and handling events.

use crate::models::{Category, ReportEntry};
use crate::store::ReportStore;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Detail,
}

/// Main application state
pub struct App {
    /// The report store
    pub store: ReportStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Column with keyboard focus
    pub focused_column: Category,

    /// Cursor row within each column
    pub selected_rows: [usize; 4],

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(store: ReportStore) -> Self {
        Self {
            store,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            focused_column: Category::Ok,
            selected_rows: [0; 4],
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        if self.active_dialog == ActiveDialog::Detail {
            self.store.clear_selection();
        }
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Drain finished loads; called on every tick
    pub fn on_tick(&mut self) {
        let outcome = self.store.poll();
        if outcome.applied {
            self.clamp_rows();
            if self.active_dialog == ActiveDialog::Detail && self.store.selected_entry().is_none()
            {
                self.active_dialog = ActiveDialog::None;
            }
        }
    }

    /// Step the selected date by `delta` days
    pub fn navigate(&mut self, delta: i64) {
        if self.store.navigate(delta) {
            self.reset_cursor();
            self.clear_status();
        } else {
            self.set_status("Already at today");
        }
    }

    /// Jump back to yesterday
    pub fn jump_to_yesterday(&mut self) {
        self.store.initialize();
        self.reset_cursor();
        self.clear_status();
    }

    /// Fetch the current day again
    pub fn reload(&mut self) {
        self.store.reload();
        self.set_status("Reloading...");
    }

    /// Focus the next column
    pub fn next_column(&mut self) {
        let next = (self.focused_column.index() + 1) % Category::ALL.len();
        self.focused_column = Category::ALL[next];
    }

    /// Focus the previous column
    pub fn prev_column(&mut self) {
        let len = Category::ALL.len();
        let prev = (self.focused_column.index() + len - 1) % len;
        self.focused_column = Category::ALL[prev];
    }

    /// Move the cursor up in the focused column
    pub fn move_up(&mut self) {
        let row = &mut self.selected_rows[self.focused_column.index()];
        *row = row.saturating_sub(1);
    }

    /// Move the cursor down in the focused column
    pub fn move_down(&mut self) {
        let len = self.column_len(self.focused_column);
        let row = &mut self.selected_rows[self.focused_column.index()];
        if *row + 1 < len {
            *row += 1;
        }
    }

    /// Entry under the cursor in the focused column
    pub fn entry_under_cursor(&self) -> Option<&ReportEntry> {
        let row = self.selected_rows[self.focused_column.index()];
        self.store
            .grouped()
            .get(self.focused_column)
            .get(row)
            .copied()
    }

    /// Select the entry under the cursor and show its details
    pub fn open_detail(&mut self) {
        let Some(position) = self
            .entry_under_cursor()
            .and_then(|entry| self.store.report().position_of(entry))
        else {
            return;
        };
        if self.store.select_entry(position) {
            self.open_dialog(ActiveDialog::Detail);
        }
    }

    fn column_len(&self, category: Category) -> usize {
        self.store.grouped().get(category).len()
    }

    fn reset_cursor(&mut self) {
        self.selected_rows = [0; 4];
        if self.active_dialog == ActiveDialog::Detail {
            self.active_dialog = ActiveDialog::None;
        }
    }

    fn clamp_rows(&mut self) {
        let counts = self.store.grouped().counts();
        for (row, count) in self.selected_rows.iter_mut().zip(counts) {
            *row = (*row).min(count.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportUnavailable;
    use crate::source::ReportSource;
    use crate::store::FixedClock;
    use chrono::{DateTime, NaiveDate};
    use std::sync::Arc;
    use std::time::Duration;

    struct StaticSource;

    impl ReportSource for StaticSource {
        fn fetch(&self, date: NaiveDate) -> Result<Vec<ReportEntry>, ReportUnavailable> {
            if date != NaiveDate::from_ymd_opt(2024, 3, 11).unwrap() {
                return Err(ReportUnavailable::Status(404));
            }
            let at = DateTime::parse_from_rfc3339("2024-03-11T02:00:00Z").unwrap();
            Ok(vec![
                ReportEntry::new("a", Some("ok"), at),
                ReportEntry::new("b", Some("ok"), at),
                ReportEntry::new("c", Some("ko"), at),
            ])
        }

        fn location(&self, date: NaiveDate) -> String {
            date.to_string()
        }
    }

    struct DuplicateSource;

    impl ReportSource for DuplicateSource {
        fn fetch(&self, _date: NaiveDate) -> Result<Vec<ReportEntry>, ReportUnavailable> {
            let at = DateTime::parse_from_rfc3339("2024-03-11T02:00:00Z").unwrap();
            Ok(vec![
                ReportEntry::new("a", Some("ok"), at).with_content("OK mail", ""),
                ReportEntry::new("a", Some("ko"), at).with_content("FAILED mail", ""),
            ])
        }

        fn location(&self, date: NaiveDate) -> String {
            date.to_string()
        }
    }

    fn loaded_app() -> App {
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let mut store = ReportStore::new(Arc::new(StaticSource), FixedClock(today));
        store.initialize();
        assert!(store.wait(Duration::from_secs(5)));
        App::new(store)
    }

    #[test]
    fn test_column_cycle() {
        let mut app = loaded_app();
        assert_eq!(app.focused_column, Category::Ok);
        app.prev_column();
        assert_eq!(app.focused_column, Category::Unknown);
        app.next_column();
        app.next_column();
        assert_eq!(app.focused_column, Category::Nok);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut app = loaded_app();
        app.move_up();
        assert_eq!(app.selected_rows[0], 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_rows[0], 1);
        assert_eq!(app.entry_under_cursor().unwrap().client, "b");

        app.next_column();
        app.move_down();
        assert_eq!(app.selected_rows[1], 0);
        assert_eq!(app.entry_under_cursor().unwrap().client, "c");
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = loaded_app();
        app.move_down();
        app.open_detail();
        assert_eq!(app.active_dialog, ActiveDialog::Detail);
        assert_eq!(app.store.selected_entry().unwrap().client, "b");

        app.close_dialog();
        assert!(!app.has_dialog());
        assert!(app.store.selected_entry().is_none());
    }

    #[test]
    fn test_open_detail_with_duplicate_client_shows_entry_under_cursor() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let mut store = ReportStore::new(Arc::new(DuplicateSource), FixedClock(today));
        store.initialize();
        assert!(store.wait(Duration::from_secs(5)));
        let mut app = App::new(store);

        app.next_column();
        assert_eq!(app.entry_under_cursor().unwrap().subject, "FAILED mail");
        app.open_detail();

        assert_eq!(app.active_dialog, ActiveDialog::Detail);
        let shown = app.store.selected_entry().unwrap();
        assert_eq!(shown.subject, "FAILED mail");
        assert_eq!(shown.category(), Category::Nok);
    }

    #[test]
    fn test_open_detail_on_empty_column_does_nothing() {
        let mut app = loaded_app();
        app.focused_column = Category::Error;
        app.open_detail();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_navigation_resets_cursor_and_refuses_future() {
        let mut app = loaded_app();
        app.move_down();
        app.navigate(-1);
        assert_eq!(app.selected_rows, [0; 4]);
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );

        app.navigate(2);
        app.navigate(1);
        assert_eq!(app.status_message.as_deref(), Some("Already at today"));
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );

        app.jump_to_yesterday();
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        assert!(app.status_message.is_none());
    }
}
