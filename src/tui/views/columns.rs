//! Category columns
//!
//! One list per category with the client, time of day and status of each
//! entry. Empty categories still render, with a placeholder row.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::{Category, ReportEntry};
use crate::tui::app::App;

/// Render the four category columns
pub fn render(frame: &mut Frame, app: &mut App, areas: &[Rect; 4]) {
    let grouped = app.store.grouped();

    for (category, entries) in grouped.iter() {
        let is_focused = category == app.focused_column;
        let border_color = if is_focused {
            Color::Cyan
        } else {
            Color::White
        };

        let block = Block::default()
            .title(format!(" {} ({}) ", category.label(), entries.len()))
            .title_style(
                Style::default()
                    .fg(category_color(category))
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let area = areas[category.index()];

        if entries.is_empty() {
            let placeholder = List::new(vec![ListItem::new(Span::styled(
                "—",
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            frame.render_widget(placeholder, area);
            continue;
        }

        let items: Vec<ListItem> = entries.iter().map(|entry| entry_item(entry)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if is_focused {
            state.select(Some(app.selected_rows[category.index()]));
        }

        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn entry_item(entry: &ReportEntry) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            entry.client.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", entry.local_time()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  {}", entry.status_label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

/// Accent color of a category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Ok => Color::Green,
        Category::Nok => Color::Red,
        Category::Error => Color::Yellow,
        Category::Unknown => Color::Gray,
    }
}
