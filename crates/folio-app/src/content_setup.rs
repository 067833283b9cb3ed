//! Built-in demo content used when no content file is configured.

use folio_registry::SectionRegistry;

/// Default portfolio sections.
pub fn demo_sections() -> SectionRegistry {
    let mut dirs = SectionRegistry::new();
    dirs.insert(
        "education",
        vec![
            "BSc Computer Science (2019)".to_string(),
            "Certified Kubernetes Administrator (2022)".to_string(),
        ],
    )
    .unwrap();
    dirs.insert(
        "skills",
        vec![
            "Go".to_string(),
            "Rust".to_string(),
            "TypeScript".to_string(),
            "PostgreSQL".to_string(),
        ],
    )
    .unwrap();
    dirs.insert(
        "projects",
        vec![
            "folio-term    this terminal".to_string(),
            "linkshrink    URL shortener with QR codes".to_string(),
            "chessviz      PGN game visualizer".to_string(),
        ],
    )
    .unwrap();
    dirs
}
