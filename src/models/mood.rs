use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::models::MoodError;

/// Date string (`YYYY-MM-DD`) → mood symbol, persisted as one record.
///
/// Symbols are kept as raw strings so that anything already stored,
/// including symbols outside the scale, survives a load/save cycle.
pub type MoodLog = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Awful,
    Down,
    Okay,
    Good,
    Great,
}

impl Mood {
    /// Best first, the order used by pickers and legends.
    pub fn all() -> Vec<Mood> {
        vec![Mood::Great, Mood::Good, Mood::Okay, Mood::Down, Mood::Awful]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mood::Great => "😀",
            Mood::Good => "🙂",
            Mood::Okay => "😐",
            Mood::Down => "😔",
            Mood::Awful => "😢",
        }
    }

    /// Position on the 1 (worst) to 5 (best) scale.
    pub fn score(&self) -> i32 {
        match self {
            Mood::Great => 5,
            Mood::Good => 4,
            Mood::Okay => 3,
            Mood::Down => 2,
            Mood::Awful => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Down => "down",
            Mood::Awful => "awful",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Down => "Down",
            Mood::Awful => "Awful",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Mood> {
        Mood::all().into_iter().find(|m| m.symbol() == symbol)
    }

    pub fn from_score(score: i32) -> Option<Mood> {
        Mood::all().into_iter().find(|m| m.score() == score)
    }
}

/// Scale value of a stored symbol; anything off the scale scores 0.
pub fn score_of(symbol: &str) -> i32 {
    Mood::from_symbol(symbol).map(|m| m.score()).unwrap_or(0)
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol(), self.display_name())
    }
}

impl FromStr for Mood {
    type Err = MoodError;

    /// Accepts a name, the symbol itself, or the 1-5 score.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(mood) = Mood::from_symbol(trimmed) {
            return Ok(mood);
        }
        if let Ok(score) = trimmed.parse::<i32>() {
            return Mood::from_score(score).ok_or_else(|| MoodError::UnknownMood(s.to_string()));
        }
        match trimmed.to_lowercase().as_str() {
            "great" | "happy" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "okay" | "ok" | "meh" => Ok(Mood::Okay),
            "down" | "low" => Ok(Mood::Down),
            "awful" | "sad" => Ok(Mood::Awful),
            _ => Err(MoodError::UnknownMood(s.to_string())),
        }
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_day(s: &str) -> Result<NaiveDate, MoodError> {
    if s.len() != 10 {
        return Err(MoodError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| MoodError::InvalidDate(s.to_string()))
}

/// Canonical MoodLog key for a date.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_bidirectional() {
        for mood in Mood::all() {
            assert_eq!(Mood::from_score(mood.score()), Some(mood));
            assert_eq!(Mood::from_symbol(mood.symbol()), Some(mood));
        }
        assert_eq!(Mood::from_score(0), None);
        assert_eq!(Mood::from_score(6), None);
    }

    #[test]
    fn unknown_symbols_score_zero() {
        assert_eq!(score_of("😀"), 5);
        assert_eq!(score_of("😢"), 1);
        assert_eq!(score_of("🤔"), 0);
        assert_eq!(score_of(""), 0);
    }

    #[test]
    fn parses_names_symbols_and_scores() {
        assert_eq!("great".parse::<Mood>(), Ok(Mood::Great));
        assert_eq!("Down".parse::<Mood>(), Ok(Mood::Down));
        assert_eq!("😐".parse::<Mood>(), Ok(Mood::Okay));
        assert_eq!("4".parse::<Mood>(), Ok(Mood::Good));
        assert_eq!(
            "7".parse::<Mood>(),
            Err(MoodError::UnknownMood("7".to_string()))
        );
        assert!("furious".parse::<Mood>().is_err());
    }

    #[test]
    fn day_parsing_is_strict() {
        let d = parse_day("2024-03-05").unwrap();
        assert_eq!(day_key(d), "2024-03-05");
        assert!(parse_day("2024-3-5").is_err());
        assert!(parse_day("2024-02-30").is_err());
        assert!(parse_day("yesterday").is_err());
    }
}
