//! TUI Views module
//!
//! Contains the date header, the category columns and the status bar.

pub mod columns;
pub mod header;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    columns::render(frame, app, &layout.columns);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Detail => dialogs::detail::render(frame, app),
        ActiveDialog::None => {}
    }
}
