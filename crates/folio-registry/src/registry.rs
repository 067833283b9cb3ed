//! In-memory registry implementation.
//!
//! Backed by a `HashMap` for lookup plus a `Vec` of names so that `keys()`
//! reports registration order, which `ls` relies on for its default listing.

use std::collections::HashMap;

use folio_types::error::{FolioError, Result};

use crate::Directories;

/// Insertion-ordered mapping from directory name to its entries.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    names: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl SectionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory. Re-registering an existing name replaces its
    /// entries but keeps its original position in `keys()`.
    ///
    /// Fails if the name is empty or contains `/` (the namespace is flat).
    pub fn insert(&mut self, name: &str, entries: Vec<String>) -> Result<()> {
        if name.is_empty() {
            return Err(FolioError::Config("empty directory name".to_string()));
        }
        if name.contains('/') {
            return Err(FolioError::Config(format!(
                "directory name may not contain '/': {name}"
            )));
        }
        if !self.entries.contains_key(name) {
            self.names.push(name.to_string());
        }
        self.entries.insert(name.to_string(), entries);
        Ok(())
    }

    /// Number of registered directories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry has no directories.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Build a registry from a sections TOML file.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let mut reg = Self::new();
        for section in crate::parse_sections(toml_str)? {
            reg.insert(&section.name, section.entries)?;
        }
        Ok(reg)
    }
}

impl Directories for SectionRegistry {
    fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn keys(&self) -> &[String] {
        &self.names
    }
}
