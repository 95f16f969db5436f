use ratatui::{
    layout::{Alignment, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{Mood, MonthlySeries};
use crate::tui::theme;

/// (index, score) pairs, one per logged day.
pub fn points(series: &MonthlySeries) -> Vec<(f64, f64)> {
    series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, series: &MonthlySeries) {
    let block = Block::default()
        .title(Span::styled(" Mood this month ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    if series.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No moods recorded this month", theme::dim())),
            Line::from(Span::styled("Press 1-5 to rate the selected day", theme::dim())),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let data = points(series);
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;

    let x_labels: Vec<Span> = series
        .labels
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| Span::styled(l.clone(), theme::dim()))
        .collect();

    let mut y_labels = vec![Span::raw(" ")];
    y_labels.extend(
        Mood::all()
            .into_iter()
            .rev()
            .map(|m| Span::styled(m.symbol(), theme::mood(m.score()))),
    );

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme::accent())
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme::dim())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::dim())
                .bounds([0.0, 5.0])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
