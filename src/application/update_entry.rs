//! Update entry use case

use crate::domain::{Entry, JournalManager, Mood};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::FileSystemRepository;
use std::str::FromStr;

/// Which entry field to replace
#[derive(Debug, Clone)]
pub enum UpdateField {
    Text(String),
    Mood(String),
}

/// Result of an update attempt
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Entry),
    /// The index was outside the collection; nothing changed
    OutOfRange {
        index: usize,
        len: usize,
    },
}

/// Service for editing journal entries in place
pub struct UpdateEntryService {
    repository: FileSystemRepository,
}

impl UpdateEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        UpdateEntryService { repository }
    }

    /// Replace the text or mood of the entry at `index` and persist.
    ///
    /// A new mood tag is validated before anything is touched. The date
    /// field is never modified after creation.
    pub fn execute(&self, index: usize, field: UpdateField) -> Result<UpdateOutcome> {
        let field = match field {
            UpdateField::Text(text) => ValidatedField::Text(text),
            UpdateField::Mood(tag) => ValidatedField::Mood(
                Mood::from_str(&tag).map_err(|_| MoodlogError::InvalidMood(tag))?,
            ),
        };

        let store = self.repository.entry_store()?;
        let mut manager = JournalManager::from_entries(store.load());

        let len = manager.len();
        let Some(entry) = manager.entry_mut(index) else {
            return Ok(UpdateOutcome::OutOfRange { index, len });
        };

        match field {
            ValidatedField::Text(text) => entry.text = text,
            ValidatedField::Mood(mood) => entry.mood = mood,
        }
        let updated = entry.clone();

        store.persist(manager.entries())?;

        Ok(UpdateOutcome::Updated(updated))
    }
}

enum ValidatedField {
    Text(String),
    Mood(Mood),
}
