//! Output formatting utilities

use crate::application::MoodSummary;
use crate::domain::{Entry, Mood};

/// Format entries as an indexed list of one-line summaries
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i, entry.summarize()));
    }
    output
}

/// Format the frequency table and descriptive statistics
pub fn format_mood_summary(summary: &MoodSummary) -> String {
    if summary.count == 0 {
        return "No data available.".to_string();
    }

    let mut output = String::from("Mood Frequency Table:\n");
    for (mood, count) in &summary.counts {
        output.push_str(&format!("{:<8} {}\n", mood.to_string(), count));
    }

    output.push_str("\nMood Statistics (count, unique, top, freq):\n");
    output.push_str(&format!("count   {}\n", summary.count));
    output.push_str(&format!("unique  {}\n", summary.unique));
    if let Some(top) = summary.top {
        output.push_str(&format!("top     {}\n", top));
    }
    output.push_str(&format!("freq    {}\n", summary.freq));

    output
}

/// Render mood frequencies as a horizontal text bar chart
pub fn render_mood_chart(counts: &[(Mood, usize)]) -> String {
    if counts.is_empty() {
        return "No data available.".to_string();
    }

    let mut output = String::from("Mood Frequency\n");
    for (mood, count) in counts {
        output.push_str(&format!(
            "{:<8} {} {}\n",
            mood.to_string(),
            "#".repeat(*count),
            count
        ));
    }
    output
}
