//! Help dialog
//!
//! Shows the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, _app: &mut App) {
    let area = centered_rect(50, 60, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![section("Dashboard"), Line::from("")];
    for kb in get_keybindings(KeyContext::Dashboard) {
        lines.push(key_line(&format_keybinding(kb), kb.description));
    }
    lines.push(Line::from(""));
    lines.push(section("Dialogs"));
    lines.push(Line::from(""));
    for kb in get_keybindings(KeyContext::Dialog) {
        if kb.context == KeyContext::Dialog {
            lines.push(key_line(&format_keybinding(kb), kb.description));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", key),
            Style::default().fg(Color::Green),
        ),
        Span::raw(description),
    ])
}
