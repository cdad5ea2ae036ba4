//! Error types for dayjot

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dayjot
#[derive(Debug, Error)]
pub enum DayjotError {
    #[error("Not a dayjot directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Id '{0}' matches more than one entry")]
    AmbiguousId(String),

    #[error("Entry id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("Stored entries could not be parsed: {0}")]
    Parse(String),

    #[error("Failed to save entries: {0}")]
    Write(String),

    #[error("Entry text is empty")]
    EmptyEntry,

    #[error("Cannot add or edit entries for a future date: {0}")]
    FutureDate(NaiveDate),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DayjotError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DayjotError::NotJournalDirectory(_) => 2,
            DayjotError::InvalidTimeReference(_) => 3,
            DayjotError::EntryNotFound(_) | DayjotError::AmbiguousId(_) => 4,
            DayjotError::Write(_) => 5,
            DayjotError::EmptyEntry | DayjotError::FutureDate(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DayjotError::NotJournalDirectory(path) => {
                format!(
                    "Not a dayjot directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'dayjot init' in this directory to create a new journal\n\
                    • Navigate to an existing dayjot directory\n\
                    • Set DAYJOT_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DayjotError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    dayjot write today\n\
                    dayjot show last monday\n\
                    dayjot show 2025-01-15",
                    ref_str
                )
            }
            DayjotError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'dayjot list' to see entry ids\n\
                    • Pass the full id or its JE-xxxxxx short form",
                    id
                )
            }
            DayjotError::AmbiguousId(id) => {
                format!(
                    "Id '{}' matches more than one entry\n\n\
                    Suggestions:\n\
                    • Use 'dayjot list' to see entry ids\n\
                    • Pass the full id instead of the short form",
                    id
                )
            }
            DayjotError::DuplicateId(id) => {
                format!(
                    "Entry id '{}' appears more than once in the stored entries\n\n\
                    Changes are refused so that no record is lost.\n\
                    Give each record a distinct id, then try again.",
                    id
                )
            }
            DayjotError::Parse(msg) => {
                format!(
                    "Stored entries could not be parsed: {}\n\n\
                    The entry file was left untouched. Restore it from a backup\n\
                    or move it aside to start a new journal.",
                    msg
                )
            }
            DayjotError::EmptyEntry => "Empty entry: please enter some text before saving.".to_string(),
            DayjotError::FutureDate(date) => {
                format!(
                    "Can't add future entries: {}\n\n\
                    You cannot add or edit entries for future dates.\n\
                    To allow it: dayjot config allow_future_dates true",
                    date
                )
            }
            DayjotError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: dayjot config editor 'vim'\n\
                    • Pass the text directly: dayjot write --text '...'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DayjotError
pub type Result<T> = std::result::Result<T, DayjotError>;
