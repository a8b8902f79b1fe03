//! Date header
//!
//! Shows the selected day between the previous/next controls. The forward
//! control is dimmed once the selected day is today.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Rapport de Sauvegarde ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let enabled = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);
    let forward_style = if app.store.can_navigate_forward() {
        enabled
    } else {
        disabled
    };

    let date = app.store.selected_date();
    let mut spans = vec![
        Span::styled("◀ ", enabled),
        Span::styled(
            date.format("%Y-%m-%d").to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", date.format("%A")),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" ▶", forward_style),
    ];

    if app.store.is_loading() {
        spans.push(Span::styled(
            "  Chargement...",
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
