//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod quote;
pub mod repository;
pub mod store;

pub use config::Config;
pub use quote::fetch_daily_quote;
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::EntryStore;
