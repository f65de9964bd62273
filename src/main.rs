use clap::Parser;
use moodlog::application::{
    init::init, list_entries, summarize_moods, AddEntryService, ConfigService, DeleteEntryService,
    DeleteOutcome, UpdateEntryService, UpdateField, UpdateOutcome,
};
use moodlog::cli::{format_entry_list, format_mood_summary, render_mood_chart, Cli, Commands};
use moodlog::domain::JournalManager;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{fetch_daily_quote, FileSystemRepository};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Add { text, mood, date } => {
            let repo = FileSystemRepository::discover()?;
            let service = AddEntryService::new(repo);

            let entry = service.execute(&text, date.as_deref(), mood.as_deref())?;

            println!("Mood: {}", entry.mood);
            println!("Entry logged successfully!");
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let entries = list_entries(&repo)?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Commands::Delete { index } => {
            let repo = FileSystemRepository::discover()?;
            let service = DeleteEntryService::new(repo);

            match service.execute(index)? {
                DeleteOutcome::Deleted(entry) => {
                    println!("Deleted entry {}: {}", index, entry.summarize());
                }
                DeleteOutcome::OutOfRange { index, len } => {
                    eprintln!(
                        "No entry at index {} (journal has {} entries). Nothing deleted.",
                        index, len
                    );
                }
            }
            Ok(())
        }
        Commands::Update { index, text, mood } => {
            let repo = FileSystemRepository::discover()?;
            let service = UpdateEntryService::new(repo);

            // clap guarantees exactly one of --text / --mood is present
            let field = match (text, mood) {
                (Some(text), None) => UpdateField::Text(text),
                (None, Some(mood)) => UpdateField::Mood(mood),
                _ => unreachable!("clap arg group enforces exactly one field"),
            };

            match service.execute(index, field)? {
                UpdateOutcome::Updated(entry) => {
                    println!("Updated entry {}: {}", index, entry.summarize());
                }
                UpdateOutcome::OutOfRange { index, len } => {
                    eprintln!(
                        "No entry at index {} (journal has {} entries). Nothing updated.",
                        index, len
                    );
                }
            }
            Ok(())
        }
        Commands::Summary => {
            let repo = FileSystemRepository::discover()?;
            let manager = JournalManager::from_entries(list_entries(&repo)?);
            let summary = summarize_moods(&manager.export_rows());
            println!("{}", format_mood_summary(&summary).trim_end());
            Ok(())
        }
        Commands::Chart => {
            let repo = FileSystemRepository::discover()?;
            let manager = JournalManager::from_entries(list_entries(&repo)?);
            let summary = summarize_moods(&manager.export_rows());
            println!("{}", render_mood_chart(&summary.counts).trim_end());
            Ok(())
        }
        Commands::Quote => {
            match fetch_daily_quote() {
                Some(quote) => {
                    println!("Here's your quote for today:");
                    println!("{}", quote);
                }
                None => println!("No quote available."),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("data_file = {}", config.data_file);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, created");
                Ok(())
            }
        }
    }
}
