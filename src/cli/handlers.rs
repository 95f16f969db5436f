use anyhow::{anyhow, Result};
use chrono::{Local, Utc};
use std::io::{self, BufRead, Write};

use crate::cli::args::{JournalCommands, MoodCommands};
use crate::config::AppConfig;
use crate::content::{daily_challenge, daily_phrase};
use crate::db::repository::{search_notes, MoodRepo, NoteRepo, ProfileRepo};
use crate::db::KvStore;
use crate::insights;
use crate::models::mood::parse_day;
use crate::models::{Mood, MonthlySeries, Note, NotesMap, YearMonth};
use crate::services::chat::{ChatClient, Conversation, Role};
use crate::services::meditation::MeditationClient;
use crate::services::weather::{self, WeatherClient};
use crate::utils::format::{
    format_temp, format_track_length, pad_to_width, progress_bar, sparkline, truncate,
};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const LAVENDER: &str = "\x1b[38;2;167;139;250m";

// ─── Setup ───────────────────────────────────────────────────────────────────

pub fn handle_setup(store: &KvStore, reset: bool) -> Result<()> {
    if !reset {
        if let Some(name) = ProfileRepo::user_name(store)? {
            println!("Already set up for {}. Use --reset to change your name.", name);
            return Ok(());
        }
    }
    println!();
    println_colored!(LAVENDER, "  Welcome to serene!");
    println!();
    loop {
        let answer = prompt("  What should I call you? ")?;
        match ProfileRepo::set_user_name(store, &answer) {
            Ok(name) => {
                println_colored!(GREEN, "  ✓ Nice to meet you, {}", name);
                break;
            }
            Err(e) => println_colored!(RED, "  ✗ {}", e),
        }
    }
    if let Ok(path) = AppConfig::config_path() {
        if !path.exists() {
            AppConfig::default().save()?;
        }
        println_colored!(DIM, "  Weather location and chat settings live in {:?}", path);
    }
    println!();
    Ok(())
}

// ─── Mood ────────────────────────────────────────────────────────────────────

pub fn handle_mood(store: &KvStore, action: &MoodCommands) -> Result<()> {
    match action {
        MoodCommands::Set { mood, date } => {
            let mood: Mood = mood.parse()?;
            let date = match date {
                Some(d) => parse_day(d)?,
                None => Local::now().date_naive(),
            };
            MoodRepo::record(store, date, mood)?;
            println_colored!(GREEN, "  ✓ {} recorded for {}", mood, date.format("%Y-%m-%d"));
        }
        MoodCommands::Today => {
            let today = Local::now().date_naive();
            match MoodRepo::get(store, today)? {
                Some(symbol) => {
                    let name = Mood::from_symbol(&symbol)
                        .map(|m| m.display_name())
                        .unwrap_or("Unrated");
                    println!("  Today: {} {}", symbol, name);
                }
                None => {
                    println_colored!(DIM, "  No mood yet today. Try `serene mood set good`");
                }
            }
        }
        MoodCommands::Show { month } => {
            let ym = resolve_month(month.as_deref())?;
            let moods = MoodRepo::load(store)?;
            let series = insights::compute(&moods, ym.year, ym.month);
            print_month(&ym, &series);
        }
    }
    Ok(())
}

fn print_month(ym: &YearMonth, series: &MonthlySeries) {
    println!();
    println_colored!(LAVENDER, "  Mood · {}", ym.title());
    println!();

    if series.is_empty() {
        println_colored!(DIM, "  No moods recorded this month");
        println!();
        return;
    }

    let (bars, axis) = chart_rows(series);
    println!("  {}", bars);
    println_colored!(DIM, "  {}", axis);
    println!();

    for mood in Mood::all() {
        let pct = series.percentages.get(&mood.score()).copied().unwrap_or(0);
        println!(
            "  {}  {}  {:>3}%",
            pad_to_width(mood.symbol(), 2),
            progress_bar(pct, 100, 20),
            pct
        );
    }
    if let Some(pct) = series.percentages.get(&0) {
        println_colored!(DIM, "  ?   {}  {:>3}%", progress_bar(*pct, 100, 20), pct);
    }

    println!();
    if let Some(avg) = series.average() {
        println_colored!(BOLD, "  {} days logged  ·  average {:.1} / 5", series.len(), avg);
    }
    println!();
}

/// Sparkline and day axis, one space-separated column per logged day.
/// A column is as wide as its label so day numbers never run together.
fn chart_rows(series: &MonthlySeries) -> (String, String) {
    let mut bars = Vec::with_capacity(series.len());
    let mut axis = Vec::with_capacity(series.len());
    for (value, label) in series.values.iter().zip(&series.labels) {
        let width = label.len().max(1);
        bars.push(pad_to_width(&sparkline(&[*value]), width));
        axis.push(pad_to_width(label, width));
    }
    (bars.join(" "), axis.join(" "))
}

fn resolve_month(month: Option<&str>) -> Result<YearMonth> {
    match month {
        Some(m) => Ok(m.parse()?),
        None => Ok(YearMonth::of(Local::now().date_naive())),
    }
}

// ─── Journal ─────────────────────────────────────────────────────────────────

pub fn handle_journal(store: &KvStore, action: &JournalCommands) -> Result<()> {
    match action {
        JournalCommands::Add { content, title } => {
            let key = NoteRepo::new_key(Utc::now());
            if content.trim().is_empty() && title.trim().is_empty() {
                NoteRepo::add(store, &key)?;
                println_colored!(GREEN, "  ✓ Empty note started; fill it in with `journal edit 1`");
            } else {
                NoteRepo::save(store, &key, Note::new(title.trim(), content.as_str()))?;
                println_colored!(GREEN, "  ✓ Note saved");
            }
        }
        JournalCommands::List { search } => {
            let notes = NoteRepo::load(store)?;
            let query = search.as_deref().unwrap_or("");
            let hits = search_notes(&notes, query);
            println!();
            if hits.is_empty() {
                println_colored!(DIM, "  No notes found");
            } else {
                // Numbering always follows the unfiltered list so it can be
                // passed straight to show/edit/delete.
                let all = search_notes(&notes, "");
                for (key, note) in hits {
                    let number = all.iter().position(|(k, _)| *k == key).unwrap_or(0) + 1;
                    println!(
                        "  {:>3}  {}  {}",
                        number,
                        display_note_date(key),
                        truncate(&note.preview(), 50)
                    );
                }
            }
            println!();
        }
        JournalCommands::Show { number } => {
            let notes = NoteRepo::load(store)?;
            let (key, note) = note_at(&notes, *number)?;
            println!();
            println_colored!(LAVENDER, "  {}", note.preview());
            println_colored!(DIM, "  {}", display_note_date(&key));
            println!();
            for line in note.content.lines() {
                println!("  {}", line);
            }
            println!();
        }
        JournalCommands::Edit { number, title, content } => {
            let notes = NoteRepo::load(store)?;
            let (key, mut note) = note_at(&notes, *number)?;
            if let Some(t) = title {
                note.title = t.trim().to_string();
            }
            if let Some(c) = content {
                note.content = c.clone();
            }
            NoteRepo::save(store, &key, note)?;
            println_colored!(GREEN, "  ✓ Note updated");
        }
        JournalCommands::Delete { number, yes } => {
            let notes = NoteRepo::load(store)?;
            let (key, note) = note_at(&notes, *number)?;
            if !*yes {
                let answer = prompt(&format!("  Delete \"{}\"? [y/N] ", note.preview()))?;
                if !answer.trim().eq_ignore_ascii_case("y") {
                    println_colored!(DIM, "  Kept");
                    return Ok(());
                }
            }
            NoteRepo::delete(store, &key)?;
            println_colored!(AMBER, "  Note deleted");
        }
    }
    Ok(())
}

/// The `number`-th note (1-based) in newest-first order.
fn note_at(notes: &NotesMap, number: usize) -> Result<(String, Note)> {
    let all = search_notes(notes, "");
    number
        .checked_sub(1)
        .and_then(|i| all.get(i))
        .map(|(k, n)| ((*k).clone(), (*n).clone()))
        .ok_or_else(|| anyhow!("No note #{}. See `serene journal list`", number))
}

fn display_note_date(key: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(key) {
        Ok(dt) => dt.with_timezone(&Local).format("%d %b %Y %H:%M").to_string(),
        Err(_) => key.to_string(),
    }
}

// ─── Daily content ───────────────────────────────────────────────────────────

pub fn handle_challenge(store: &KvStore) -> Result<()> {
    let now = Utc::now();
    let start = ProfileRepo::challenge_start(store, now)?;
    let (idx, text) = daily_challenge(start, now);
    println!();
    println_colored!(LAVENDER, "  Daily challenge · day {}", idx + 1);
    println!();
    println_colored!(BOLD, "  {}", text);
    println!();
    Ok(())
}

pub fn handle_phrase(store: &KvStore) -> Result<()> {
    let name = ProfileRepo::user_name(store)?.unwrap_or_else(|| "friend".to_string());
    println!();
    println!("  Good to see you, {}! How are you feeling today?", name);
    println_colored!(DIM, "  {}", daily_phrase(Local::now().date_naive()));
    println!();
    Ok(())
}

// ─── Remote services ─────────────────────────────────────────────────────────

pub fn handle_weather(config: &AppConfig) -> Result<()> {
    let client = WeatherClient::new()?;
    let report = client.fetch(&config.weather, Local::now().naive_local())?;

    println!();
    println_colored!(LAVENDER, "  Weather · {}", config.weather.location_name);
    println!();

    match &report.current {
        Some(now) => {
            println_colored!(
                BOLD,
                "  {}  {}  {}",
                weather::icon(now.weathercode, now.is_day == 1),
                format_temp(Some(now.temperature)),
                weather::describe(now.weathercode)
            );
            println_colored!(DIM, "  Wind {} km/h", now.windspeed.round() as i64);
        }
        None => println_colored!(DIM, "  Current conditions unavailable"),
    }

    if !report.hours.is_empty() {
        println!();
        let hours: Vec<String> = report
            .hours
            .iter()
            .map(|h| format!("{} {}", h.time.format("%H:00"), format_temp(h.temperature)))
            .collect();
        println!("  {}", hours.join("  "));
    }

    if !report.days.is_empty() {
        println!();
        for day in &report.days {
            let code = day.weathercode.unwrap_or(-1);
            println!(
                "  {}  {}  {:>4} / {:<4}  {:>3}%  {}",
                day.date.format("%a").to_string().to_uppercase(),
                weather::icon(code, true),
                format_temp(day.max),
                format_temp(day.min),
                day.precipitation.map(|p| p.round() as i64).unwrap_or(0),
                weather::describe(code)
            );
        }
    }
    println!();
    Ok(())
}

pub fn handle_meditate(config: &AppConfig, query: &[String]) -> Result<()> {
    let client = MeditationClient::new()?;
    let tracks = client.search(&config.meditation, &query.join(" "))?;

    println!();
    if tracks.is_empty() {
        println_colored!(DIM, "  No tracks found");
    }
    for track in &tracks {
        println_colored!(
            BOLD,
            "  {}  {}",
            truncate(&track.title, 48),
            format_track_length(track.duration)
        );
        println_colored!(DIM, "     {}", track.artist.name);
        if !track.preview.is_empty() {
            println_colored!(DIM, "     ▶ {}", track.preview);
        }
    }
    println!();
    Ok(())
}

pub fn handle_chat(config: &AppConfig) -> Result<()> {
    let client = ChatClient::new(&config.chat)?;
    let mut convo = Conversation::new(&config.chat.companion_name);

    println!();
    for message in convo.messages() {
        println_colored!(LAVENDER, "  {}", message.content.replace('\n', "\n  "));
    }
    println_colored!(DIM, "  (empty line or Ctrl-D to leave)");
    println!();

    loop {
        let input = match prompt_opt("  you › ")? {
            Some(line) if !line.trim().is_empty() => line,
            _ => break,
        };
        if let Some(reply) = convo.send(&client, &input) {
            let color = if reply.role == Role::Assistant { LAVENDER } else { DIM };
            println_colored!(
                color,
                "  {} › {}",
                config.chat.companion_name,
                reply.content.replace('\n', "\n  ")
            );
            println!();
        }
    }
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(store: &KvStore, month: Option<&str>) -> Result<()> {
    let ym = resolve_month(month)?;
    let moods = MoodRepo::load(store)?;
    let series = insights::compute(&moods, ym.year, ym.month);
    let prefix = ym.prefix();

    println!("# serene mood summary");
    println!("# {}", ym.title());
    println!();
    println!("## Days");
    for (date, symbol) in moods.iter().filter(|(d, _)| d.starts_with(&prefix)) {
        let name = Mood::from_symbol(symbol)
            .map(|m| m.display_name())
            .unwrap_or("Unrated");
        println!("  {}  {}  {}", date, symbol, name);
    }
    println!();
    println!("## Distribution");
    for (score, pct) in series.percentages.iter().rev() {
        let label = Mood::from_score(*score)
            .map(|m| m.display_name())
            .unwrap_or("Unrated");
        println!("  {:<8} {:>3}%", label, pct);
    }
    println!();
    println!("## Summary");
    println!("  Days logged: {}", series.len());
    match series.average() {
        Some(avg) => println!("  Average:     {:.1} / 5", avg),
        None => println!("  Average:     –"),
    }
    Ok(())
}

// ─── Reset ───────────────────────────────────────────────────────────────────

pub fn handle_reset(store: &KvStore, yes: bool) -> Result<()> {
    if !yes {
        let answer = prompt("  Delete ALL moods, notes and settings? Type 'delete' to confirm: ")?;
        if answer.trim() != "delete" {
            println_colored!(DIM, "  Nothing was deleted");
            return Ok(());
        }
    }
    let count = store.keys()?.len();
    store.clear()?;
    println_colored!(AMBER, "  Deleted {} stored entries", count);
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn prompt(message: &str) -> Result<String> {
    Ok(prompt_opt(message)?.unwrap_or_default())
}

/// `None` on end of input.
fn prompt_opt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::tests::memory_db;
    use crate::models::MoodLog;

    #[test]
    fn notes_are_numbered_newest_first() {
        let mut notes = NotesMap::new();
        notes.insert("2024-03-01T08:00:00.000Z".into(), Note::new("old", ""));
        notes.insert("2024-03-02T08:00:00.000Z".into(), Note::new("new", ""));

        assert_eq!(note_at(&notes, 1).unwrap().1.title, "new");
        assert_eq!(note_at(&notes, 2).unwrap().1.title, "old");
        assert!(note_at(&notes, 0).is_err());
        assert!(note_at(&notes, 3).is_err());
    }

    #[test]
    fn explicit_month_is_parsed() {
        assert_eq!(resolve_month(Some("2024-03")).unwrap(), YearMonth::new(2024, 3).unwrap());
        assert!(resolve_month(Some("03-2024")).is_err());
    }

    #[test]
    fn set_rejects_bad_input_without_writing() {
        let conn = memory_db();
        let store = KvStore::new(&conn);

        let bad_mood = MoodCommands::Set { mood: "furious".into(), date: None };
        assert!(handle_mood(&store, &bad_mood).is_err());

        let bad_date = MoodCommands::Set { mood: "good".into(), date: Some("2024-02-30".into()) };
        assert!(handle_mood(&store, &bad_date).is_err());

        assert!(MoodRepo::load(&store).unwrap().is_empty());
    }

    #[test]
    fn set_with_date_records() {
        let conn = memory_db();
        let store = KvStore::new(&conn);

        let cmd = MoodCommands::Set { mood: "5".into(), date: Some("2024-03-01".into()) };
        handle_mood(&store, &cmd).unwrap();

        let moods = MoodRepo::load(&store).unwrap();
        assert_eq!(moods.get("2024-03-01").map(String::as_str), Some("😀"));
    }

    #[test]
    fn chart_axis_keeps_multi_digit_days_apart() {
        let mut moods = MoodLog::new();
        moods.insert("2024-03-01".into(), "😀".into());
        moods.insert("2024-03-02".into(), "😐".into());
        moods.insert("2024-03-15".into(), "😢".into());
        let series = insights::compute(&moods, 2024, 3);

        let (bars, axis) = chart_rows(&series);
        assert_eq!(axis.split_whitespace().collect::<Vec<_>>(), vec!["1", "2", "15"]);
        assert_eq!(bars, "█ ▄ ▁ ");
        assert_eq!(bars.chars().count(), axis.chars().count());
    }

    #[test]
    fn chart_axis_shows_every_kept_label() {
        let moods: MoodLog = (10..=19)
            .map(|d| (format!("2024-03-{}", d), "🙂".to_string()))
            .collect();
        let series = insights::compute(&moods, 2024, 3);

        let (_, axis) = chart_rows(&series);
        let days: Vec<&str> = axis.split_whitespace().collect();
        assert_eq!(days, vec!["10", "11", "12", "13", "14", "15", "16", "17", "18", "19"]);
    }

    #[test]
    fn blank_add_starts_an_empty_note() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        let cmd = JournalCommands::Add { content: "  ".into(), title: "".into() };
        handle_journal(&store, &cmd).unwrap();

        let notes = NoteRepo::load(&store).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.values().next(), Some(&Note::default()));
    }

    #[test]
    fn edit_keeps_the_key() {
        let conn = memory_db();
        let store = KvStore::new(&conn);
        NoteRepo::save(&store, "2024-03-01T08:00:00.000Z", Note::new("t", "body")).unwrap();

        let cmd = JournalCommands::Edit { number: 1, title: Some("Title".into()), content: None };
        handle_journal(&store, &cmd).unwrap();

        let notes = NoteRepo::load(&store).unwrap();
        assert_eq!(
            notes.get("2024-03-01T08:00:00.000Z"),
            Some(&Note::new("Title", "body"))
        );
    }
}
