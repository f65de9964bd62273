//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod mood_summary;
pub mod update_entry;

pub use add_entry::AddEntryService;
pub use delete_entry::{DeleteEntryService, DeleteOutcome};
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use mood_summary::{summarize_moods, MoodSummary};
pub use update_entry::{UpdateEntryService, UpdateField, UpdateOutcome};
