//! CLI command definitions

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood-tagging journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a journal entry
    Add {
        /// Entry text
        text: String,

        /// Mood tag (happy, sad, angry, anxious, neutral); classified
        /// from the text when omitted
        #[arg(short, long)]
        mood: Option<String>,

        /// Entry date (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List entries with their index
    List,

    /// Delete the entry at the given index
    Delete {
        /// Index as shown by 'moodlog list'
        index: usize,
    },

    /// Update the text or mood of an entry
    #[command(group(ArgGroup::new("field").required(true).multiple(false)))]
    Update {
        /// Index as shown by 'moodlog list'
        index: usize,

        /// New entry text
        #[arg(long, group = "field")]
        text: Option<String>,

        /// New mood tag
        #[arg(long, group = "field")]
        mood: Option<String>,
    },

    /// Show mood frequency table and statistics
    Summary,

    /// Render a bar chart of mood frequencies
    Chart,

    /// Fetch a daily quote
    Quote,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
