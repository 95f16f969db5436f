use anyhow::Result;
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::content;
use crate::db::repository::{MoodRepo, ProfileRepo};
use crate::db::KvStore;
use crate::insights;
use crate::models::{Mood, MoodLog, MonthlySeries, YearMonth};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{calendar, challenge, chart, distribution, header, statusbar};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

pub struct App {
    pub view: View,
    pub should_quit: bool,
    pub status: Option<String>,

    pub today: NaiveDate,
    pub user_name: String,
    pub phrase: &'static str,
    pub challenge_start: DateTime<Utc>,
    pub challenge: (usize, &'static str),

    // Selected month and day; `cursor` always lies inside `month`
    pub month: YearMonth,
    pub cursor: NaiveDate,

    pub moods: MoodLog,
    pub series: MonthlySeries,
}

impl App {
    pub fn new(store: &KvStore, today: NaiveDate, now: DateTime<Utc>) -> Result<Self> {
        let user_name = ProfileRepo::user_name(store)?.unwrap_or_else(|| "friend".to_string());
        let start = ProfileRepo::challenge_start(store, now)?;

        let mut app = App {
            view: View::Dashboard,
            should_quit: false,
            status: None,
            today,
            user_name,
            phrase: content::daily_phrase(today),
            challenge_start: start,
            challenge: content::daily_challenge(start, now),
            month: YearMonth::of(today),
            cursor: today,
            moods: MoodRepo::load(store)?,
            series: MonthlySeries::default(),
        };
        app.recompute();
        Ok(app)
    }

    /// Rebuild the derived series for the selected month.
    pub fn recompute(&mut self) {
        self.series = insights::compute(&self.moods, self.month.year, self.month.month);
    }

    pub fn move_cursor(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        let Some(next) = moved else { return };

        self.cursor = next;
        let month = YearMonth::of(next);
        if month != self.month {
            self.month = month;
            self.recompute();
        }
    }

    pub fn change_month(&mut self, delta: i32) {
        self.month = if delta >= 0 { self.month.next() } else { self.month.prev() };
        let day = self.cursor.day().min(self.month.days_in_month());
        if let Some(cursor) = NaiveDate::from_ymd_opt(self.month.year, self.month.month, day) {
            self.cursor = cursor;
        }
        self.recompute();
    }

    pub fn jump_to_today(&mut self) {
        self.cursor = self.today;
        let month = YearMonth::of(self.today);
        if month != self.month {
            self.month = month;
            self.recompute();
        }
    }

    pub fn record(&mut self, store: &KvStore, mood: Mood) {
        match MoodRepo::record(store, self.cursor, mood) {
            Ok(moods) => {
                self.moods = moods;
                self.recompute();
                self.status = Some(format!(
                    "{} saved for {}",
                    mood,
                    self.cursor.format("%b %d")
                ));
            }
            Err(e) => {
                log::error!("failed to record mood: {:#}", e);
                self.status = Some(format!("Could not save mood: {}", e));
            }
        }
    }

    /// Refresh date-bound content when the clock passes midnight.
    pub fn tick(&mut self, today: NaiveDate, now: DateTime<Utc>) {
        if today != self.today {
            self.today = today;
            self.phrase = content::daily_phrase(today);
            self.challenge = content::daily_challenge(self.challenge_start, now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &KvStore) {
        // Some terminals report release/repeat as well
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key, store),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent, store: &KvStore) {
        self.status = None;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::Char('[') => self.change_month(-1),
            KeyCode::Char(']') => self.change_month(1),
            KeyCode::Char('t') => self.jump_to_today(),
            KeyCode::Char(c @ '1'..='5') => {
                let score = c as i32 - '0' as i32;
                if let Some(mood) = Mood::from_score(score) {
                    self.record(store, mood);
                }
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Dashboard;
        }
    }

    // ─── Drawing ─────────────────────────────────────────────────────────────

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer[0], &self.user_name, self.phrase, self.today);
        statusbar::render(frame, outer[2], self.status.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(39), Constraint::Min(0)])
            .split(outer[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(14), // calendar
                Constraint::Min(0),     // challenge
            ])
            .split(columns[0]);

        calendar::render(frame, left[0], &self.month, self.cursor, self.today, &self.moods);
        challenge::render(frame, left[1], self.challenge.0, self.challenge.1);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),    // chart
                Constraint::Length(10), // distribution
            ])
            .split(columns[1]);

        chart::render(frame, right[0], &self.series);
        distribution::render(frame, right[1], &self.series);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(12).min(area.height),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [← →]      ", "Previous / next day"),
            ("  [↑ ↓]      ", "Previous / next week"),
            ("  [ [ ] ]    ", "Previous / next month"),
            ("  [t]        ", "Jump to today"),
            ("  [1-5]      ", "Rate the selected day (1 awful, 5 great)"),
            ("  [?]        ", "Toggle help"),
            ("  [Esc] [q]  ", "Quit"),
        ];

        let mut lines = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(key, theme::accent()),
                Span::styled(action, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::accent())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(store: &KvStore) -> Result<()> {
    let mut app = App::new(store, Local::now().date_naive(), Utc::now())?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(1000);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key, store);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(Local::now().date_naive(), Utc::now()),
            }
        }
    })();

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::tests::memory_db;
    use chrono::TimeZone;
    use crossterm::event::KeyModifiers;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_on(store: &KvStore, today: &str) -> App {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        App::new(store, day(today), now).unwrap()
    }

    #[test]
    fn starts_on_today_with_empty_series() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let app = app_on(&store, "2024-03-15");
        assert_eq!(app.month, YearMonth::new(2024, 3).unwrap());
        assert_eq!(app.cursor, day("2024-03-15"));
        assert!(app.series.is_empty());
        assert_eq!(app.user_name, "friend");
    }

    #[test]
    fn number_key_records_and_recomputes() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-15");

        app.handle_key(press(KeyCode::Char('5')), &store);
        assert_eq!(app.series.values, vec![5]);
        assert_eq!(app.series.labels, vec!["15"]);

        app.handle_key(press(KeyCode::Left), &store);
        app.handle_key(press(KeyCode::Char('1')), &store);
        assert_eq!(app.series.values, vec![1, 5]);
        assert_eq!(app.series.percentages.get(&1), Some(&50));

        let stored = MoodRepo::load(&store).unwrap();
        assert_eq!(stored.get("2024-03-14").map(String::as_str), Some("😢"));
    }

    #[test]
    fn re_rating_a_day_overwrites() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-15");

        app.handle_key(press(KeyCode::Char('2')), &store);
        app.handle_key(press(KeyCode::Char('4')), &store);
        assert_eq!(app.series.values, vec![4]);
    }

    #[test]
    fn cursor_crossing_month_switches_series() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-01");
        app.handle_key(press(KeyCode::Char('3')), &store);

        app.handle_key(press(KeyCode::Left), &store);
        assert_eq!(app.cursor, day("2024-02-29"));
        assert_eq!(app.month, YearMonth::new(2024, 2).unwrap());
        assert!(app.series.is_empty());

        app.handle_key(press(KeyCode::Down), &store);
        assert_eq!(app.month, YearMonth::new(2024, 3).unwrap());
        assert_eq!(app.series.values, vec![3]);
    }

    #[test]
    fn month_change_clamps_cursor_day() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-31");

        app.handle_key(press(KeyCode::Char('[')), &store);
        assert_eq!(app.cursor, day("2024-02-29"));
        app.handle_key(press(KeyCode::Char(']')), &store);
        app.handle_key(press(KeyCode::Char(']')), &store);
        assert_eq!(app.cursor, day("2024-04-29"));

        app.handle_key(press(KeyCode::Char('t')), &store);
        assert_eq!(app.cursor, day("2024-03-31"));
    }

    #[test]
    fn help_toggles_and_esc_quits() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-15");

        app.handle_key(press(KeyCode::Char('?')), &store);
        assert_eq!(app.view, View::Help);
        // keys other than ? and Esc are ignored in help
        app.handle_key(press(KeyCode::Char('5')), &store);
        assert!(app.series.is_empty());
        app.handle_key(press(KeyCode::Esc), &store);
        assert_eq!(app.view, View::Dashboard);
        assert!(!app.should_quit);

        app.handle_key(press(KeyCode::Esc), &store);
        assert!(app.should_quit);
    }

    #[test]
    fn midnight_tick_moves_to_the_next_challenge() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-15");
        assert_eq!(app.challenge.0, 0);

        // same day: nothing changes
        app.tick(day("2024-03-15"), Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap());
        assert_eq!(app.challenge.0, 0);

        let next = Utc.with_ymd_and_hms(2024, 3, 16, 12, 0, 0).unwrap();
        app.tick(day("2024-03-16"), next);
        assert_eq!(app.today, day("2024-03-16"));
        assert_eq!(app.challenge, content::daily_challenge(app.challenge_start, next));
        assert_eq!(app.challenge.0, 1);
        assert_eq!(app.phrase, content::daily_phrase(day("2024-03-16")));
    }

    #[test]
    fn help_lists_every_quit_key() {
        use ratatui::{backend::TestBackend, Terminal};

        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-15");
        app.handle_key(press(KeyCode::Char('?')), &store);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("[Esc] [q]"));
    }

    #[test]
    fn release_events_are_ignored() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let mut app = app_on(&store, "2024-03-15");

        let mut key = press(KeyCode::Char('5'));
        key.kind = KeyEventKind::Release;
        app.handle_key(key, &store);
        assert!(app.series.is_empty());
    }
}
