//! Journal entry record

use crate::domain::Mood;

/// Preview length used by [`Entry::summarize`]
const SUMMARY_PREVIEW_CHARS: usize = 60;

/// Preview length used by [`Entry::brief`]
const BRIEF_PREVIEW_CHARS: usize = 50;

/// One journal record: a date string, free-form text, and a mood label.
///
/// The date is caller-supplied and stored verbatim; it is not validated as
/// a calendar date. Entries have no identity beyond their position in the
/// manager's sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: String,
    pub text: String,
    pub mood: Mood,
}

impl Entry {
    pub fn new(text: impl Into<String>, date: impl Into<String>, mood: Mood) -> Self {
        Entry {
            date: date.into(),
            text: text.into(),
            mood,
        }
    }

    /// One-line summary: date, mood, and a truncated text preview
    pub fn summarize(&self) -> String {
        format!(
            "{} | {} | {}...",
            self.date,
            self.mood,
            truncate_chars(&self.text, SUMMARY_PREVIEW_CHARS)
        )
    }

    /// Short text-only preview, without date or mood
    pub fn brief(&self) -> String {
        format!("{}...", truncate_chars(&self.text, BRIEF_PREVIEW_CHARS))
    }
}

/// Take up to `limit` characters, respecting char boundaries
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
