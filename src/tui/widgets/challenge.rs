use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, day: usize, text: &str) {
    let block = Block::default()
        .title(Span::styled(format!(" Daily challenge · day {} ", day + 1), theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let paragraph = Paragraph::new(vec![Line::from(Span::styled(text, theme::bold()))])
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
