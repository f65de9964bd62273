//! Mood frequency and descriptive statistics use case

use crate::domain::mood::ALL_MOODS;
use crate::domain::Mood;

/// Frequency counts and descriptive statistics over exported entry rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSummary {
    /// (label, count) pairs for moods that occur at least once, sorted by
    /// count descending; ties keep the fixed label order
    pub counts: Vec<(Mood, usize)>,
    /// Total number of entries
    pub count: usize,
    /// Number of distinct mood labels present
    pub unique: usize,
    /// Most frequent mood, if any entries exist
    pub top: Option<Mood>,
    /// Count of the most frequent mood
    pub freq: usize,
}

/// Summarize mood frequencies from `(date, mood, text)` rows.
///
/// Rows whose mood field does not parse as a known label are ignored; the
/// store already skips them on load, so this only matters for callers
/// feeding rows from elsewhere.
pub fn summarize_moods(rows: &[(String, String, String)]) -> MoodSummary {
    let mut counts: Vec<(Mood, usize)> = Vec::new();

    for mood in ALL_MOODS {
        let count = rows
            .iter()
            .filter(|(_, m, _)| m.as_str() == mood.as_str())
            .count();
        if count > 0 {
            counts.push((mood, count));
        }
    }

    // Stable sort keeps the label order within equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let count = rows.len();
    let unique = counts.len();
    let top = counts.first().map(|(mood, _)| *mood);
    let freq = counts.first().map(|(_, n)| *n).unwrap_or(0);

    MoodSummary {
        counts,
        count,
        unique,
        top,
        freq,
    }
}
