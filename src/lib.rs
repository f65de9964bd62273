//! moodlog - Mood-tagging journal for the terminal
//!
//! A command-line journaling application: entries are tagged with a mood,
//! either manually or through a keyword-frequency classifier, and persist
//! to a flat CSV file that is fully rewritten after every mutation.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
