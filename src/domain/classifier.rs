//! Keyword-frequency mood classification

use crate::domain::mood::{Mood, SCORED_MOODS};
use regex::Regex;
use std::sync::OnceLock;

/// One compiled alternation per scored label, e.g. `\b(happy|joy|...)\b`.
/// Word boundaries give whole-word semantics: "happy!" matches, "mad"
/// inside "madness" does not.
fn keyword_patterns() -> &'static [(Mood, Regex)] {
    static PATTERNS: OnceLock<Vec<(Mood, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SCORED_MOODS
            .iter()
            .map(|&mood| {
                let alternation = mood.keywords().join("|");
                let regex = Regex::new(&format!(r"\b(?:{})\b", alternation))
                    .expect("keyword lists contain only word characters");
                (mood, regex)
            })
            .collect()
    })
}

/// Classify free text into a mood label by keyword frequency.
///
/// Counts whole-word, case-insensitive keyword occurrences per label and
/// returns the label with the highest nonzero total. Ties break to the
/// earlier label in the fixed order happy, sad, angry, anxious. Text with
/// no keyword match at all (including the empty string) is neutral.
pub fn analyze_mood(text: &str) -> Mood {
    let lowered = text.to_lowercase();

    let mut best = Mood::Neutral;
    let mut best_count = 0usize;

    for (mood, regex) in keyword_patterns() {
        let count = regex.find_iter(&lowered).count();
        if count > best_count {
            best = *mood;
            best_count = count;
        }
    }

    best
}
