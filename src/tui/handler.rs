//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        // Terminal will redraw on the next frame
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_dashboard_key(app, key)
}

/// Handle keys on the dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Date navigation
        KeyCode::Char('h') | KeyCode::Left => app.navigate(-1),
        KeyCode::Char('l') | KeyCode::Right => app.navigate(1),
        KeyCode::Char('t') => app.jump_to_yesterday(),
        KeyCode::Char('r') => app.reload(),

        // Column and row movement
        KeyCode::Tab => app.next_column(),
        KeyCode::BackTab => app.prev_column(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Enter => app.open_detail(),
        KeyCode::Esc => app.clear_status(),

        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_dialog(),
        KeyCode::Char('?') if app.active_dialog == ActiveDialog::Help => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportUnavailable;
    use crate::models::ReportEntry;
    use crate::source::ReportSource;
    use crate::store::{FixedClock, ReportStore};
    use chrono::NaiveDate;
    use crossterm::event::KeyEvent;
    use std::sync::Arc;

    struct EmptySource;

    impl ReportSource for EmptySource {
        fn fetch(&self, _date: NaiveDate) -> Result<Vec<ReportEntry>, ReportUnavailable> {
            Ok(Vec::new())
        }

        fn location(&self, date: NaiveDate) -> String {
            date.to_string()
        }
    }

    fn app() -> App {
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        App::new(ReportStore::new(Arc::new(EmptySource), FixedClock(today)))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrows_navigate_days() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store.selected_date(), app.store.today());
    }

    #[test]
    fn test_help_dialog_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        press(&mut app, KeyCode::Left);
        assert_eq!(
            app.store.selected_date(),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }
}
