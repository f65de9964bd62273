//! Add entry use case

use crate::domain::{analyze_mood, Entry, JournalManager, Mood};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::Local;
use std::str::FromStr;

/// Service for adding journal entries
pub struct AddEntryService {
    repository: FileSystemRepository,
}

impl AddEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddEntryService { repository }
    }

    /// Append a new entry and persist the full collection.
    ///
    /// A manual mood tag is validated against the known labels; without
    /// one the mood is classified from the entry text. A missing date
    /// defaults to today's local date.
    pub fn execute(
        &self,
        text: &str,
        date: Option<&str>,
        manual_mood: Option<&str>,
    ) -> Result<Entry> {
        let mood = match manual_mood {
            Some(tag) => {
                Mood::from_str(tag).map_err(|_| MoodlogError::InvalidMood(tag.to_string()))?
            }
            None => analyze_mood(text),
        };

        let date = match date {
            Some(date) => date.to_string(),
            None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
        };

        let store = self.repository.entry_store()?;
        let mut manager = JournalManager::from_entries(store.load());

        let entry = Entry::new(text, date, mood);
        manager.add(entry.clone());

        store.persist(manager.entries())?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service_in(temp: &TempDir) -> AddEntryService {
        init(temp.path()).unwrap();
        AddEntryService::new(FileSystemRepository::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_add_with_manual_mood() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let entry = service
            .execute("Plain day", Some("2025-04-29"), Some("happy"))
            .unwrap();

        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.date, "2025-04-29");
    }

    #[test]
    fn test_add_classifies_when_untagged() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let entry = service
            .execute("I am so mad right now!", Some("2025-04-29"), None)
            .unwrap();

        assert_eq!(entry.mood, Mood::Angry);
    }

    #[test]
    fn test_add_rejects_invalid_manual_mood() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let result = service.execute("text", None, Some("ecstatic"));

        match result.unwrap_err() {
            MoodlogError::InvalidMood(tag) => assert_eq!(tag, "ecstatic"),
            _ => panic!("Expected InvalidMood error"),
        }
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let entry = service.execute("no date given", None, None).unwrap();

        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(entry.date, today);
    }

    #[test]
    fn test_add_persists_appended_entry() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service
            .execute("first", Some("2025-04-29"), Some("neutral"))
            .unwrap();
        service
            .execute("second", Some("2025-04-30"), Some("sad"))
            .unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let loaded = repo.entry_store().unwrap().load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "first");
        assert_eq!(loaded[1].text, "second");
        assert_eq!(loaded[1].mood, Mood::Sad);
    }
}
