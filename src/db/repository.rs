use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::db::store::KvStore;
use crate::models::mood::day_key;
use crate::models::{Mood, MoodLog, Note, NotesMap};

pub const MOODS_KEY: &str = "@moods";
pub const NOTES_KEY: &str = "@notes";
pub const USER_NAME_KEY: &str = "userName";
pub const START_DATE_KEY: &str = "@start_date";

// ─── Mood log ────────────────────────────────────────────────────────────────

pub struct MoodRepo;

impl MoodRepo {
    /// The whole mood log; an absent record is an empty log.
    pub fn load(store: &KvStore) -> Result<MoodLog> {
        match store.get(MOODS_KEY)? {
            None => Ok(MoodLog::new()),
            Some(raw) => serde_json::from_str(&raw).context("Parsing stored mood log"),
        }
    }

    pub fn save(store: &KvStore, moods: &MoodLog) -> Result<()> {
        let raw = serde_json::to_string(moods).context("Serializing mood log")?;
        store.set(MOODS_KEY, &raw)
    }

    /// Upsert one day and write the whole log back. Returns the new log.
    pub fn record(store: &KvStore, date: NaiveDate, mood: Mood) -> Result<MoodLog> {
        let mut moods = Self::load(store)?;
        moods.insert(day_key(date), mood.symbol().to_string());
        Self::save(store, &moods)?;
        log::info!("recorded {} for {}", mood.as_str(), day_key(date));
        Ok(moods)
    }

    pub fn get(store: &KvStore, date: NaiveDate) -> Result<Option<String>> {
        Ok(Self::load(store)?.remove(&day_key(date)))
    }
}

// ─── Journal ─────────────────────────────────────────────────────────────────

pub struct NoteRepo;

impl NoteRepo {
    pub fn load(store: &KvStore) -> Result<NotesMap> {
        match store.get(NOTES_KEY)? {
            None => Ok(NotesMap::new()),
            Some(raw) => serde_json::from_str(&raw).context("Parsing stored journal"),
        }
    }

    fn save_all(store: &KvStore, notes: &NotesMap) -> Result<()> {
        if notes.is_empty() {
            store.remove(NOTES_KEY)?;
            return Ok(());
        }
        let raw = serde_json::to_string(notes).context("Serializing journal")?;
        store.set(NOTES_KEY, &raw)
    }

    /// Key for a note created at `at`, e.g. `2024-03-05T21:14:03.120Z`.
    pub fn new_key(at: DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Start an empty note under `key`, keeping one that already exists.
    pub fn add(store: &KvStore, key: &str) -> Result<NotesMap> {
        let mut notes = Self::load(store)?;
        notes.entry(key.to_string()).or_default();
        Self::save_all(store, &notes)?;
        Ok(notes)
    }

    /// Insert or replace the note under `key`. Returns the new journal.
    pub fn save(store: &KvStore, key: &str, note: Note) -> Result<NotesMap> {
        let mut notes = Self::load(store)?;
        notes.insert(key.to_string(), note);
        Self::save_all(store, &notes)?;
        Ok(notes)
    }

    pub fn delete(store: &KvStore, key: &str) -> Result<bool> {
        let mut notes = Self::load(store)?;
        if notes.remove(key).is_none() {
            return Ok(false);
        }
        Self::save_all(store, &notes)?;
        Ok(true)
    }
}

/// Notes whose title or body contains `query`, newest first.
pub fn search_notes<'a>(notes: &'a NotesMap, query: &str) -> Vec<(&'a String, &'a Note)> {
    notes
        .iter()
        .rev()
        .filter(|(_, note)| note.matches(query))
        .collect()
}

// ─── Profile ─────────────────────────────────────────────────────────────────

pub struct ProfileRepo;

impl ProfileRepo {
    pub fn user_name(store: &KvStore) -> Result<Option<String>> {
        store.get(USER_NAME_KEY)
    }

    /// Store a trimmed, non-blank name.
    pub fn set_user_name(store: &KvStore, name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("Name cannot be empty"));
        }
        store.set(USER_NAME_KEY, trimmed)?;
        Ok(trimmed.to_string())
    }

    /// First day the creative challenges were shown; set to `now` on first use.
    pub fn challenge_start(store: &KvStore, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        if let Some(raw) = store.get(START_DATE_KEY)? {
            match DateTime::parse_from_rfc3339(&raw) {
                Ok(start) => return Ok(start.with_timezone(&Utc)),
                Err(e) => log::warn!("ignoring bad {} value '{}': {}", START_DATE_KEY, raw, e),
            }
        }
        store.set(START_DATE_KEY, &NoteRepo::new_key(now))?;
        Ok(now)
    }
}
