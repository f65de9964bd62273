//! List entries use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Load all entries from the configured store, in insertion order.
pub fn list_entries(repository: &FileSystemRepository) -> Result<Vec<Entry>> {
    let store = repository.entry_store()?;
    Ok(store.load())
}
