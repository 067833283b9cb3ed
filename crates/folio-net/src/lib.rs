//! External data sources for folio-term.
//!
//! The `joke` command delegates to a [`JokeSource`]: either the real joke
//! API over HTTP, or a canned offline source. Payload parsing is shared so
//! a hosting page that does its own fetching can still decode responses
//! through this crate.

mod http;
mod joke;

/// A parsed `http://` URL.
pub use http::Url;
/// Perform an HTTP GET and return the response body.
pub use http::http_get;
/// Offline joke source with a built-in rotation.
pub use joke::CannedJokeSource;
/// Joke source backed by an HTTP joke API endpoint.
pub use joke::HttpJokeSource;
/// A decoded joke payload (two-part or single).
pub use joke::JokePayload;
/// Abstraction over the external joke data source.
pub use joke::JokeSource;
/// Decode a joke API JSON payload.
pub use joke::parse_joke;
