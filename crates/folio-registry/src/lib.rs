//! Directory registry for folio-term.
//!
//! The terminal simulates a single-level file tree rooted at `~`: each
//! registered "directory" is a site section whose contents are an ordered
//! list of display strings. The registry is populated once at startup from a
//! content source and is read-only afterwards.

mod content;
mod registry;

/// A `[[section]]` table from a content file.
pub use content::SectionEntry;
/// Parse a sections TOML file into a list of section entries.
pub use content::parse_sections;
/// Insertion-ordered in-memory registry implementation.
pub use registry::SectionRegistry;

/// Read-only lookup over the simulated directories.
///
/// Keys form a flat namespace: exactly one level below the root, and no key
/// contains `/`. `keys()` preserves registration order, which is also the
/// order directories are listed in.
pub trait Directories {
    /// The entries of the named directory, or `None` if it is not registered.
    fn get(&self, name: &str) -> Option<&[String]>;

    /// Whether the named directory is registered.
    fn has(&self, name: &str) -> bool;

    /// All directory names, in registration order.
    fn keys(&self) -> &[String];
}
