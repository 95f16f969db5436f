use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "serene", version, author, about = "A calm terminal companion for mood tracking, journaling and daily reflection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First-run setup (your name)
    Setup {
        /// Ask again even if already set up
        #[arg(long)]
        reset: bool,
    },
    /// Mood tracking
    Mood {
        #[command(subcommand)]
        action: MoodCommands,
    },
    /// Journal notes
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Show today's creative-writing challenge
    Challenge,
    /// Show today's motivational phrase
    Phrase,
    /// Current weather and forecast for the configured location
    Weather,
    /// Search meditation tracks
    Meditate {
        /// What to search for (e.g. sleep, focus, rain)
        query: Vec<String>,
    },
    /// Talk to the chat companion
    Chat,
    /// Print a monthly mood summary to stdout
    Export {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Delete all stored data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MoodCommands {
    /// Record how you feel (great, good, okay, down, awful, or 1-5)
    Set {
        mood: String,
        /// Day as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show today's mood
    Today,
    /// Show the mood chart and distribution for a month
    Show {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// Write a new note
    Add {
        /// Note body
        content: String,
        /// Optional title
        #[arg(long, default_value = "")]
        title: String,
    },
    /// List notes, newest first
    List {
        /// Only notes whose title or body contain this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one note in full
    Show {
        /// Number from `journal list`
        number: usize,
    },
    /// Replace a note's title and/or body
    Edit {
        /// Number from `journal list`
        number: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Number from `journal list`
        number: usize,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
