//! Delete entry use case

use crate::domain::{Entry, JournalManager};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Result of a delete attempt
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted(Entry),
    /// The index was outside the collection; nothing changed
    OutOfRange {
        index: usize,
        len: usize,
    },
}

/// Service for deleting journal entries by index
pub struct DeleteEntryService {
    repository: FileSystemRepository,
}

impl DeleteEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DeleteEntryService { repository }
    }

    /// Remove the entry at `index` and persist. An out-of-range index is
    /// reported, not an error, and leaves the file untouched.
    pub fn execute(&self, index: usize) -> Result<DeleteOutcome> {
        let store = self.repository.entry_store()?;
        let mut manager = JournalManager::from_entries(store.load());

        let Some(entry) = manager.entries().get(index).cloned() else {
            return Ok(DeleteOutcome::OutOfRange {
                index,
                len: manager.len(),
            });
        };

        manager.delete(index);
        store.persist(manager.entries())?;

        Ok(DeleteOutcome::Deleted(entry))
    }
}
