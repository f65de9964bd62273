//! Daily quote fetch over HTTP

use std::time::Duration;

const DEFAULT_QUOTE_URL: &str = "https://zenquotes.io/api/random";
const QUOTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetch a random daily quote.
///
/// The request carries a bounded timeout and every failure mode degrades
/// to `None` after a stderr notice; this call never takes the process
/// down. The endpoint can be overridden through `MOODLOG_QUOTE_URL`.
pub fn fetch_daily_quote() -> Option<String> {
    let url =
        std::env::var("MOODLOG_QUOTE_URL").unwrap_or_else(|_| DEFAULT_QUOTE_URL.to_string());

    match fetch(&url) {
        Ok(quote) => Some(quote),
        Err(e) => {
            eprintln!("Failed to fetch quote: {}. Please try again later.", e);
            None
        }
    }
}

fn fetch(url: &str) -> std::result::Result<String, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(QUOTE_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let body: serde_json::Value = response.json().map_err(|e| e.to_string())?;

    format_quote(&body).ok_or_else(|| "unexpected response shape".to_string())
}

/// Expected shape: `[{"q": "<quote>", "a": "<author>"}]`
fn format_quote(body: &serde_json::Value) -> Option<String> {
    let first = body.get(0)?;
    let quote = first.get("q")?.as_str()?;
    let author = first.get("a")?.as_str()?;
    Some(format!("{} - {}", quote, author))
}
