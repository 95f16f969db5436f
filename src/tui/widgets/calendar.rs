use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::mood::{day_key, score_of};
use crate::models::{MoodLog, YearMonth};
use crate::tui::theme;
use crate::utils::format::pad_to_width;

const CELL: usize = 5;

/// Week rows for `month`, Monday first; `None` pads the first and last week.
pub fn weeks(month: &YearMonth) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_monday() as usize;
    let days = month.days_in_month() as usize;

    let mut rows = Vec::new();
    let mut row: [Option<NaiveDate>; 7] = [None; 7];
    let mut col = lead;
    for d in 0..days {
        row[col] = first.checked_add_days(chrono::Days::new(d as u64));
        col += 1;
        if col == 7 {
            rows.push(row);
            row = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        rows.push(row);
    }
    rows
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    month: &YearMonth,
    cursor: NaiveDate,
    today: NaiveDate,
    moods: &MoodLog,
) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", month.title()), theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from(
        ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
            .iter()
            .map(|d| Span::styled(pad_to_width(&format!(" {}", d), CELL), theme::dim()))
            .collect::<Vec<_>>(),
    )];

    for week in weeks(month) {
        let spans = week
            .iter()
            .map(|day| match day {
                None => Span::raw(" ".repeat(CELL)),
                Some(date) => day_cell(*date, cursor, today, moods),
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn day_cell<'a>(date: NaiveDate, cursor: NaiveDate, today: NaiveDate, moods: &MoodLog) -> Span<'a> {
    let (text, mut style) = match moods.get(&day_key(date)) {
        Some(symbol) if !symbol.is_empty() => (format!(" {}", symbol), theme::mood(score_of(symbol))),
        _ => (format!(" {:>2}", date.day()), theme::dim()),
    };
    if date == today {
        style = style.add_modifier(Modifier::UNDERLINED).fg(theme::LAVENDER);
    }
    if date == cursor {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Span::styled(pad_to_width(&text, CELL), style)
}
