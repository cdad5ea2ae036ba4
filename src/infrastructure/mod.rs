//! Infrastructure layer - Storage, configuration and external processes

pub mod config;
pub mod editor;
pub mod entry_store;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use editor::EditorSession;
pub use entry_store::{EntryStore, LoadSource, Snapshot, DEFAULT_STORAGE_KEY};
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
