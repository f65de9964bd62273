//! Domain layer - Business logic and domain models

pub mod classifier;
pub mod entry;
pub mod journal;
pub mod mood;

pub use classifier::analyze_mood;
pub use entry::Entry;
pub use journal::JournalManager;
pub use mood::Mood;
