//! In-memory journal collection

use crate::domain::Entry;

/// Ordered collection of journal entries.
///
/// Insertion order is preserved; entries are identified by index. Callers
/// are expected to persist the full collection after each mutation — the
/// manager itself never touches the filesystem, so every mutation costs
/// O(n) at persist time.
#[derive(Debug, Default)]
pub struct JournalManager {
    entries: Vec<Entry>,
}

impl JournalManager {
    pub fn new() -> Self {
        JournalManager::default()
    }

    /// Build a manager from already-loaded entries
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        JournalManager { entries }
    }

    /// Append an entry. No dedup, no content validation.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`. Out-of-range indices are a silent
    /// no-op, not an error.
    pub fn delete(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Live view of the ordered sequence
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Mutable access for in-place edits of text or mood
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project entries as (date, mood, text) rows for reporting.
    /// Note the order differs from the Entry field order.
    pub fn export_rows(&self) -> Vec<(String, String, String)> {
        self.entries
            .iter()
            .map(|e| (e.date.clone(), e.mood.to_string(), e.text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;

    fn entry(text: &str) -> Entry {
        Entry::new(text, "2025-04-29", Mood::Neutral)
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut manager = JournalManager::new();
        manager.add(entry("first"));
        manager.add(entry("second"));
        manager.add(entry("third"));

        let texts: Vec<&str> = manager.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_delete_in_range() {
        let mut manager = JournalManager::new();
        manager.add(entry("first"));
        manager.add(entry("second"));

        manager.delete(0);

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.entries()[0].text, "second");
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut manager = JournalManager::new();
        manager.add(entry("only"));

        manager.delete(1);
        manager.delete(100);

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.entries()[0].text, "only");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut manager = JournalManager::new();
        manager.delete(0);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_add_then_delete_zero_n_times_empties() {
        let mut manager = JournalManager::new();
        let n = 5;
        for i in 0..n {
            manager.add(entry(&format!("entry {}", i)));
        }
        for _ in 0..n {
            manager.delete(0);
        }
        assert!(manager.is_empty());
    }

    #[test]
    fn test_entry_mut_edits_in_place() {
        let mut manager = JournalManager::new();
        manager.add(entry("before"));

        let e = manager.entry_mut(0).unwrap();
        e.text = "after".to_string();
        e.mood = Mood::Happy;

        assert_eq!(manager.entries()[0].text, "after");
        assert_eq!(manager.entries()[0].mood, Mood::Happy);
    }

    #[test]
    fn test_entry_mut_out_of_range() {
        let mut manager = JournalManager::new();
        assert!(manager.entry_mut(0).is_none());
    }

    #[test]
    fn test_export_rows_order_is_date_mood_text() {
        let mut manager = JournalManager::new();
        manager.add(Entry::new("walked the dog", "2025-04-29", Mood::Happy));

        let rows = manager.export_rows();
        assert_eq!(
            rows,
            vec![(
                "2025-04-29".to_string(),
                "happy".to_string(),
                "walked the dog".to_string()
            )]
        );
    }
}
