//! Domain layer - Entry model, pure transforms and read-side views

pub mod calendar;
pub mod collection;
pub mod entry;
pub mod prompts;
pub mod query;
pub mod time_ref;
pub mod transforms;

pub use collection::EntryCollection;
pub use entry::{timestamp_now, EntryId, JournalEntry};
pub use query::EntryFilter;
pub use time_ref::TimeReference;
pub use transforms::{apply_create, apply_delete, apply_toggle, apply_update};
