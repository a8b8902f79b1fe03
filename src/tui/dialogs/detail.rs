//! Entry detail dialog
//!
//! Shows the subject and body of the selected entry, with its status, time
//! and mail link.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::views::columns::category_color;

/// Render the detail dialog for the selected entry
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(entry) = app.store.selected_entry() else {
        return;
    };

    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let category = entry.category();
    let block = Block::default()
        .title(format!(" {} ", entry.client))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(category_color(category)));

    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status:  ", label),
            Span::styled(
                format!("{} ({})", entry.status_label(), category),
                Style::default().fg(category_color(category)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Time:    ", label),
            Span::raw(entry.local_time()),
        ]),
    ];
    if let Some(link) = &entry.mail_link {
        lines.push(Line::from(vec![
            Span::styled("Mail:    ", label),
            Span::styled(link.clone(), Style::default().fg(Color::Blue)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Subject: ", label),
        Span::styled(
            entry.subject.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.extend(entry.body.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Esc] Close",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
