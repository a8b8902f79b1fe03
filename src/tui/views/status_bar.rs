//! Status bar view
//!
//! Shows the load state of the selected day, any status message and key hints.
//! A failed load gets its own banner so it is not mistaken for a day without
//! backups.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::store::LoadState;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    match app.store.load_state() {
        LoadState::Idle => {
            spans.push(Span::styled(" Idle ", Style::default().fg(Color::Gray)));
        }
        LoadState::Loading => {
            spans.push(Span::styled(
                " Loading ",
                Style::default().fg(Color::Cyan),
            ));
        }
        LoadState::Loaded => {
            spans.push(Span::styled(
                format!(" {} entries ", app.store.entries().len()),
                Style::default().fg(Color::Green),
            ));
        }
        LoadState::Failed(err) => {
            let banner = if err.is_missing() {
                " No report published for this day ".to_string()
            } else {
                format!(" Report unavailable: {} ", err)
            };
            spans.push(Span::styled(
                banner,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        app.store.location(),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " ←/→:Day  Enter:Details  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
