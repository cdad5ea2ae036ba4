//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayjot")]
#[command(about = "Date-based personal journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry for a day (default: today)
    Write {
        /// Day to file the entry under (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(value_name = "DATE", num_args = 0..)]
        date: Vec<String>,

        /// Entry text; opens the editor when omitted
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Replace the text of an entry
    Edit {
        /// Entry id (full id or JE-xxxxxx)
        id: String,

        /// New text; opens the editor with the current text when omitted
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Show the entries filed under one day (default: today)
    Show {
        #[arg(value_name = "DATE", num_args = 0..)]
        date: Vec<String>,
    },

    /// List all entries, most recent first
    List {
        /// Only entries created today
        #[arg(long)]
        today: bool,

        /// Only memorable entries
        #[arg(short, long)]
        memorable: bool,
    },

    /// List memorable entries
    Favorites,

    /// Toggle the memorable flag of an entry
    Fav {
        /// Entry id (full id or JE-xxxxxx)
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id (full id or JE-xxxxxx)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the writing prompt for a day (default: today)
    Prompt {
        #[arg(value_name = "DATE", num_args = 0..)]
        date: Vec<String>,
    },

    /// Show a month with the days that have entries (default: this month)
    Calendar {
        /// Month as YYYY-MM
        #[arg(value_name = "MONTH")]
        month: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Join multi-word date arguments ("last", "monday"), defaulting to today
pub fn date_argument(words: &[String]) -> String {
    if words.is_empty() {
        "today".to_string()
    } else {
        words.join(" ")
    }
}
