//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{date_argument, Cli, Commands};
pub use output::{format_calendar, format_day_view, format_entry_list, format_favorites, format_saved};
