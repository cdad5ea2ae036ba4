//! Write and edit entries

use crate::application::open_store;
use crate::domain::{calendar, prompts, query, JournalEntry, TimeReference};
use crate::error::{DayjotError, Result};
use crate::infrastructure::{Config, EditorSession, FileSystemRepository};
use chrono::{Local, NaiveDate};
use std::path::Path;

/// Trim entry text, rejecting text that is empty once trimmed
pub fn validate_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DayjotError::EmptyEntry);
    }
    Ok(trimmed.to_string())
}

/// Service for creating and editing entries
pub struct WriteEntryService {
    repository: FileSystemRepository,
}

impl WriteEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        WriteEntryService { repository }
    }

    /// Create an entry on the day `date_ref` names, relative to the local date.
    /// Without `text` the entry is composed in the editor, under that day's
    /// writing prompt.
    pub fn create(&self, date_ref: &str, text: Option<String>) -> Result<JournalEntry> {
        self.create_relative_to(date_ref, text, Local::now().date_naive())
    }

    pub fn create_relative_to(
        &self,
        date_ref: &str,
        text: Option<String>,
        today: NaiveDate,
    ) -> Result<JournalEntry> {
        let (config, store) = open_store(&self.repository)?;

        let date = TimeReference::parse(date_ref)?.resolve(today);
        if !config.allow_future_dates && calendar::is_future_date(date, today) {
            return Err(DayjotError::FutureDate(date));
        }

        let raw = match text {
            Some(text) => text,
            None => self.compose(&config, "", Some(prompts::prompt_for(date)))?,
        };
        let text = validate_text(&raw)?;

        store.create(date, text)
    }

    /// Replace the text of an existing entry. `id` may be the full id or `JE-xxxxxx`.
    /// Without `text` the current text is opened in the editor.
    pub fn edit(&self, id: &str, text: Option<String>) -> Result<JournalEntry> {
        let (config, store) = open_store(&self.repository)?;

        let entries = store.try_load_all()?;
        let id = query::resolve_id(&entries, id)?;

        let raw = match text {
            Some(text) => text,
            None => {
                let current = entries
                    .iter()
                    .find(|e| e.id == id)
                    .map(|e| e.text.as_str())
                    .unwrap_or_default();
                self.compose(&config, current, None)?
            }
        };
        let text = validate_text(&raw)?;

        store.update(&id, text)
    }

    fn compose(&self, config: &Config, initial: &str, prompt: Option<&str>) -> Result<String> {
        let editor = EditorSession::new(config.get_editor());
        compose_in(&editor, &self.repository.scratch_path(), initial, prompt)
    }
}

/// Run `editor` on a scratch file seeded with `prompt` and `initial`,
/// returning the text with the prompt lines removed
fn compose_in(editor: &EditorSession, scratch: &Path, initial: &str, prompt: Option<&str>) -> Result<String> {
    let raw = editor.compose(scratch, &prompts::scratch_seed(prompt, initial))?;
    Ok(prompts::strip_header(&raw, prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::journal;
    use crate::infrastructure::JournalRepository;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text("  Hello \n").unwrap(), "Hello");
        assert!(matches!(validate_text(" \n\t "), Err(DayjotError::EmptyEntry)));
        assert!(matches!(validate_text(""), Err(DayjotError::EmptyEntry)));
    }

    #[test]
    fn test_create_resolves_relative_date_and_trims() {
        let (_temp, repo) = journal();
        let service = WriteEntryService::new(repo);

        let entry = service
            .create_relative_to("yesterday", Some("  Hello  ".into()), date(2024, 3, 1))
            .unwrap();
        assert_eq!(entry.date, date(2024, 2, 29));
        assert_eq!(entry.text, "Hello");
    }

    #[test]
    fn test_create_rejects_future_date() {
        let (_temp, repo) = journal();
        let service = WriteEntryService::new(repo.clone());

        let result = service.create_relative_to("tomorrow", Some("x".into()), date(2024, 3, 1));
        assert!(matches!(result, Err(DayjotError::FutureDate(d)) if d == date(2024, 3, 2)));

        let (_, store) = open_store(&repo).unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_create_future_date_when_allowed() {
        let (_temp, repo) = journal();
        let mut config = repo.load_config().unwrap();
        config.allow_future_dates = true;
        repo.save_config(&config).unwrap();

        let entry = WriteEntryService::new(repo)
            .create_relative_to("tomorrow", Some("plan".into()), date(2024, 3, 1))
            .unwrap();
        assert_eq!(entry.date, date(2024, 3, 2));
    }

    #[test]
    fn test_create_rejects_empty_text() {
        let (_temp, repo) = journal();
        let service = WriteEntryService::new(repo);
        let result = service.create_relative_to("today", Some("   ".into()), date(2024, 3, 1));
        assert!(matches!(result, Err(DayjotError::EmptyEntry)));
    }

    #[test]
    fn test_edit_by_short_id() {
        let (_temp, repo) = journal();
        let service = WriteEntryService::new(repo);
        let entry = service
            .create_relative_to("today", Some("first".into()), date(2024, 3, 1))
            .unwrap();

        let edited = service.edit(&entry.id.short(), Some(" second ".into())).unwrap();
        assert_eq!(edited.id, entry.id);
        assert_eq!(edited.text, "second");
        assert!(edited.updated_at.is_some());
    }

    #[test]
    fn test_edit_unknown_id() {
        let (_temp, repo) = journal();
        let service = WriteEntryService::new(repo);
        assert!(matches!(
            service.edit("12345", Some("x".into())),
            Err(DayjotError::EntryNotFound(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_shows_prompt_and_strips_it() {
        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("editor.sh");
        std::fs::write(&script, "cp \"$1\" \"$1.seen\"\nprintf 'Went hiking\\n' >> \"$1\"\n").unwrap();
        let editor = EditorSession::new(format!("sh {}", script.display()));
        let scratch = temp.path().join("ENTRY_EDITMSG.txt");
        let prompt = prompts::prompt_for(date(2024, 3, 1));

        let text = compose_in(&editor, &scratch, "", Some(prompt)).unwrap();
        assert_eq!(validate_text(&text).unwrap(), "Went hiking");

        let seen = std::fs::read_to_string(temp.path().join("ENTRY_EDITMSG.txt.seen")).unwrap();
        assert!(seen.starts_with(&format!("# {}\n", prompt)));
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_untouched_prompt_is_empty_entry() {
        let temp = tempfile::TempDir::new().unwrap();
        let editor = EditorSession::new("true".to_string());
        let scratch = temp.path().join("ENTRY_EDITMSG.txt");

        let text = compose_in(&editor, &scratch, "", Some(prompts::WRITING_PROMPTS[0])).unwrap();
        assert!(matches!(validate_text(&text), Err(DayjotError::EmptyEntry)));
    }
}
