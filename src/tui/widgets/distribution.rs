use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{Mood, MonthlySeries};
use crate::tui::theme;
use crate::utils::format::pad_to_width;

pub fn render(frame: &mut Frame, area: Rect, series: &MonthlySeries) {
    let block = Block::default()
        .title(Span::styled(" Distribution ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    // room for "  😀 " on the left and " 100%" on the right
    let bar_width = (area.width.saturating_sub(16) as usize).min(30);

    let mut lines = Vec::new();
    for mood in Mood::all() {
        let pct = series.percentages.get(&mood.score()).copied().unwrap_or(0);
        lines.push(bar_line(mood.symbol(), pct, bar_width, theme::mood(mood.score())));
    }
    if let Some(pct) = series.percentages.get(&0) {
        lines.push(bar_line("?", *pct, bar_width, theme::dim()));
    }

    lines.push(Line::from(""));
    let summary = match series.average() {
        Some(avg) => format!("  {} days  ·  avg {:.1}", series.len(), avg),
        None => "  No days logged".to_string(),
    };
    lines.push(Line::from(Span::styled(summary, theme::dim())));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn bar_line(label: &str, pct: u32, width: usize, style: ratatui::style::Style) -> Line<'static> {
    let filled = ((pct.min(100) as f64 / 100.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    Line::from(vec![
        Span::raw("  "),
        Span::styled(pad_to_width(label, 3), style),
        Span::styled("▇".repeat(filled), style),
        Span::styled("·".repeat(empty), theme::dim()),
        Span::styled(format!(" {:>3}%", pct), style.add_modifier(Modifier::BOLD)),
    ])
}
