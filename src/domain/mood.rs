//! Mood labels and their keyword lists

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood labels a journal entry can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Neutral,
}

/// Scored labels in classifier tie-break order. Neutral is the fallback
/// when nothing matches and carries no keywords of its own.
pub const SCORED_MOODS: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Angry, Mood::Anxious];

/// All labels, for display and validation
pub const ALL_MOODS: [Mood; 5] = [
    Mood::Happy,
    Mood::Sad,
    Mood::Angry,
    Mood::Anxious,
    Mood::Neutral,
];

impl Mood {
    /// Keyword stems associated with this label. Matching is whole-word
    /// and case-insensitive; there is no stemming beyond these literals.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &[
                "happy",
                "joy",
                "excited",
                "grateful",
                "glad",
                "cheerful",
                "content",
                "delighted",
            ],
            Mood::Sad => &[
                "sad",
                "depressed",
                "unhappy",
                "down",
                "crying",
                "gloomy",
                "heartbroken",
                "hopeless",
            ],
            Mood::Angry => &[
                "angry",
                "mad",
                "furious",
                "upset",
                "frustrated",
                "annoyed",
                "irritated",
                "enraged",
            ],
            Mood::Anxious => &[
                "nervous",
                "worried",
                "anxious",
                "tense",
                "stressed",
                "panicked",
                "overwhelmed",
                "uneasy",
            ],
            Mood::Neutral => &[],
        }
    }

    /// Lowercase label as it appears on disk and in output
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "anxious" => Ok(Mood::Anxious),
            "neutral" => Ok(Mood::Neutral),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: happy, sad, angry, anxious, neutral",
                s
            )),
        }
    }
}
