use thiserror::Error;

/// Input errors raised before anything is written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    #[error("Unknown mood '{0}'. Use: great, good, okay, down, awful (or 1-5)")]
    UnknownMood(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}
