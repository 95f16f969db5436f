use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Creation timestamp (RFC 3339) → note, persisted as one record.
pub type NotesMap = BTreeMap<String, Note>;

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Title, else the first line of the body, else a placeholder.
    pub fn preview(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        match self.content.split('\n').next() {
            Some(first) if !first.is_empty() => first.to_string(),
            _ => "(untitled)".to_string(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.content.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_falls_back_to_first_line() {
        assert_eq!(Note::new("Walk", "by the sea").preview(), "Walk");
        assert_eq!(Note::new("", "line one\nline two").preview(), "line one");
        assert_eq!(Note::new("", "").preview(), "(untitled)");
    }

    #[test]
    fn matching_ignores_case() {
        let note = Note::new("Gratitude", "Coffee with Ana");
        assert!(note.matches("gratitude"));
        assert!(note.matches("ANA"));
        assert!(note.matches(""));
        assert!(!note.matches("tea"));
    }
}
