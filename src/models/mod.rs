pub mod error;
pub mod month;
pub mod mood;
pub mod note;
pub mod stats;

pub use error::MoodError;
pub use month::YearMonth;
pub use mood::{Mood, MoodLog};
pub use note::{Note, NotesMap};
pub use stats::MonthlySeries;
