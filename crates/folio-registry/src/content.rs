//! Content-source parsing.
//!
//! Directory content ships as a TOML file of `[[section]]` tables; the
//! hosting page generates or hand-maintains it.

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

/// A single section (simulated directory) from a content file.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionEntry {
    /// Directory name (flat namespace, no `/`).
    pub name: String,
    /// Display lines, in order. A section with no entries lists as empty.
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Parse a sections TOML file into a list of section entries.
pub fn parse_sections(toml_str: &str) -> Result<Vec<SectionEntry>> {
    #[derive(Deserialize)]
    struct ContentFile {
        #[serde(default)]
        section: Vec<SectionEntry>,
    }

    let file: ContentFile = toml::from_str(toml_str)
        .map_err(|e| FolioError::Config(format!("sections file: {e}")))?;
    Ok(file.section)
}
