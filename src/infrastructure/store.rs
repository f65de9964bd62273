//! Flat-file CSV persistence for journal entries

use crate::domain::{Entry, Mood};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const HEADER: [&str; 3] = ["date", "text", "mood"];

/// Persists entries to a CSV file and loads them back.
///
/// The file format is stable: UTF-8, header row `date,text,mood`, one row
/// per entry with standard CSV quoting for embedded commas, quotes, and
/// newlines. Every `persist` rewrites the whole file; every `load` re-reads
/// it from disk.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: PathBuf) -> Self {
        EntryStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the backing file with the full entry sequence.
    ///
    /// Writes to a temp file in the same directory and renames it into
    /// place, so a failed write leaves the previous file untouched.
    pub fn persist(&self, entries: &[Entry]) -> Result<()> {
        let mut contents = String::new();
        contents.push_str(&HEADER.join(","));
        contents.push('\n');
        for entry in entries {
            contents.push_str(&format!(
                "{},{},{}\n",
                escape_field(&entry.date),
                escape_field(&entry.text),
                escape_field(entry.mood.as_str())
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.moodlog-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("journal.csv"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if self.path.exists() {
            // rename does not overwrite on Windows
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Read all valid entries from the backing file.
    ///
    /// A missing file is the first-run case and yields an empty vec. An
    /// unreadable or malformed file also yields an empty vec after a
    /// stderr diagnostic. Records missing a required field or carrying an
    /// unknown mood label are skipped individually with a diagnostic;
    /// they never abort the load.
    pub fn load(&self) -> Vec<Entry> {
        if !self.path.exists() {
            eprintln!("No previous journal entries found. Starting fresh.");
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error loading entries: {}", e);
                return Vec::new();
            }
        };

        parse_entries(&contents)
    }
}

/// Parse CSV contents into entries, skipping invalid records
fn parse_entries(contents: &str) -> Vec<Entry> {
    let mut records = parse_records(contents).into_iter();

    let Some(header) = records.next() else {
        return Vec::new();
    };

    // Column positions come from the header by name, so column order in
    // the file is not load-bearing.
    let columns: Option<Vec<usize>> = HEADER
        .iter()
        .map(|name| header.iter().position(|field| field.as_str() == *name))
        .collect();
    let Some(columns) = columns else {
        eprintln!("Error loading entries: missing required columns in header");
        return Vec::new();
    };
    let &[date_col, text_col, mood_col] = &columns[..] else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for record in records {
        let fields = (
            record.get(date_col),
            record.get(text_col),
            record.get(mood_col),
        );
        let (Some(date), Some(text), Some(mood)) = fields else {
            eprintln!("Warning: Skipping an entry due to missing fields.");
            continue;
        };
        let mood = match Mood::from_str(mood) {
            Ok(mood) => mood,
            Err(_) => {
                eprintln!("Warning: Skipping an entry with unknown mood '{}'.", mood);
                continue;
            }
        };
        entries.push(Entry::new(text.clone(), date.clone(), mood));
    }
    entries
}

/// Quote a field when it contains a comma, quote, or line break
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split CSV text into records of fields, honoring quoted fields that may
/// span lines. Blank lines are dropped.
fn parse_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                if record.len() > 1 || !record[0].is_empty() {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }

    // Final record when the file does not end with a newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> EntryStore {
        EntryStore::new(temp.path().join("journal.csv"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_persist_writes_header_and_rows() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store
            .persist(&[Entry::new("walked the dog", "2025-04-29", Mood::Happy)])
            .unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "date,text,mood\n2025-04-29,walked the dog,happy\n");
    }

    #[test]
    fn test_roundtrip_preserves_entries_and_order() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let entries = vec![
            Entry::new("Testing file ops", "2025-04-29", Mood::Neutral),
            Entry::new("Another test entry", "2025-04-30", Mood::Happy),
        ];

        store.persist(&entries).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_roundtrip_with_commas_quotes_and_newlines() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let entries = vec![
            Entry::new("rain, then sun", "2025-05-01", Mood::Happy),
            Entry::new("she said \"hello\"", "2025-05-02", Mood::Neutral),
            Entry::new("line one\nline two", "2025-05-03", Mood::Sad),
        ];

        store.persist(&entries).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_persist_overwrites_previous_contents() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store
            .persist(&[Entry::new("old", "2025-04-29", Mood::Neutral)])
            .unwrap();
        store
            .persist(&[Entry::new("new", "2025-04-30", Mood::Happy)])
            .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "new");
    }

    #[test]
    fn test_persist_empty_sequence_leaves_header_only() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.persist(&[]).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "date,text,mood\n");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_record_missing_field_is_skipped() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(
            store.path(),
            "date,text,mood\n2025-04-29,only two fields\n2025-04-30,valid entry,happy\n",
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "valid entry");
        assert_eq!(loaded[0].mood, Mood::Happy);
    }

    #[test]
    fn test_record_with_unknown_mood_is_skipped() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(
            store.path(),
            "date,text,mood\n2025-04-29,strange,ecstatic\n2025-04-30,fine,neutral\n",
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "fine");
    }

    #[test]
    fn test_load_honors_header_column_order() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(
            store.path(),
            "mood,date,text\nhappy,2025-04-29,reordered columns\n",
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, "2025-04-29");
        assert_eq!(loaded[0].text, "reordered columns");
        assert_eq!(loaded[0].mood, Mood::Happy);
    }

    #[test]
    fn test_load_with_bad_header_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "a,b,c\n1,2,3\n").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(
            store.path(),
            "date,text,mood\n\n2025-04-29,kept,neutral\n\n",
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_accepts_crlf_line_endings() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(
            store.path(),
            "date,text,mood\r\n2025-04-29,windows file,sad\r\n",
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "windows file");
        assert_eq!(loaded[0].mood, Mood::Sad);
    }

    #[test]
    fn test_load_accepts_missing_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "date,text,mood\n2025-04-29,no newline,angry").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].mood, Mood::Angry);
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_persist_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let store = EntryStore::new(temp.path().join("data").join("journal.csv"));

        store
            .persist(&[Entry::new("nested", "2025-04-29", Mood::Neutral)])
            .unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().len(), 1);
    }
}
