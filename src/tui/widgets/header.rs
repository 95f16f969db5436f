use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, user_name: &str, phrase: &str, today: NaiveDate) {
    let title_line = Line::from(vec![
        Span::styled("serene", theme::accent().add_modifier(Modifier::BOLD)),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(
            format!("Good to see you, {}! How are you feeling today?", user_name),
            theme::bold(),
        ),
    ]);

    let phrase_line = Line::from(vec![
        Span::styled(phrase, theme::teal().add_modifier(Modifier::ITALIC)),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(today.format("%A, %b %d, %Y").to_string(), theme::dim()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::accent())
        .style(theme::base());

    let paragraph = Paragraph::new(vec![title_line, Line::from(""), phrase_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
