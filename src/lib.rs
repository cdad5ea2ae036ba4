//! dayjot - Date-based personal journal
//!
//! Free-text entries filed under calendar days, with favorites ("memorable")
//! for quick recall. The whole journal is one JSON array stored under a single
//! key; every view is computed from it on read.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DayjotError;
