//! Joke payloads and sources.
//!
//! The joke API returns either a two-part payload (setup and delivery) or a
//! single self-contained statement, discriminated by a `type` field.

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

/// A decoded joke payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum JokePayload {
    /// Setup and delivery arrive as separate lines.
    #[serde(rename = "twopart")]
    TwoPart { setup: String, delivery: String },
    /// One self-contained statement.
    #[serde(rename = "single")]
    Single { joke: String },
}

/// Decode a joke API JSON payload.
///
/// Unknown fields (category, id, flags) are ignored; an unknown `type` or
/// missing fields are a network-boundary error.
pub fn parse_joke(json: &str) -> Result<JokePayload> {
    serde_json::from_str(json).map_err(|e| FolioError::Net(format!("joke payload: {e}")))
}

/// Abstraction over the external joke data source.
pub trait JokeSource {
    /// Fetch one joke.
    fn fetch_joke(&self) -> Result<JokePayload>;
}

// ---------------------------------------------------------------------------
// HTTP source
// ---------------------------------------------------------------------------

/// Joke source backed by an HTTP joke API endpoint.
#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    url: String,
}

impl HttpJokeSource {
    /// Create a source fetching from the given `http://` endpoint.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl JokeSource for HttpJokeSource {
    fn fetch_joke(&self) -> Result<JokePayload> {
        let body = crate::http_get(&self.url)?;
        let text = std::str::from_utf8(&body)
            .map_err(|_| FolioError::Net("non-UTF-8 joke payload".to_string()))?;
        parse_joke(text)
    }
}

// ---------------------------------------------------------------------------
// Canned source
// ---------------------------------------------------------------------------

/// Offline joke source rotating through a built-in list.
///
/// Used when the terminal runs without network access, and in tests.
#[derive(Debug, Default)]
pub struct CannedJokeSource;

const CANNED: &[(&str, &str)] = &[
    (
        "Why do programmers prefer dark mode?",
        "Because light attracts bugs.",
    ),
    (
        "Why did the developer go broke?",
        "Because they used up all their cache.",
    ),
    (
        "How many programmers does it take to change a light bulb?",
        "None, that's a hardware problem.",
    ),
    (
        "Why do Java developers wear glasses?",
        "Because they don't C#.",
    ),
];

const CANNED_SINGLE: &[&str] = &[
    "There are only 10 kinds of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, walks up to two tables and asks: may I join you?",
    "It works on my machine.",
];

impl CannedJokeSource {
    /// Create a canned source.
    pub fn new() -> Self {
        Self
    }
}

impl JokeSource for CannedJokeSource {
    fn fetch_joke(&self) -> Result<JokePayload> {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as usize;
        // Alternate between two-part and single payloads.
        if seed.is_multiple_of(2) {
            let (setup, delivery) = CANNED[(seed / 2) % CANNED.len()];
            Ok(JokePayload::TwoPart {
                setup: setup.to_string(),
                delivery: delivery.to_string(),
            })
        } else {
            Ok(JokePayload::Single {
                joke: CANNED_SINGLE[(seed / 2) % CANNED_SINGLE.len()].to_string(),
            })
        }
    }
}
