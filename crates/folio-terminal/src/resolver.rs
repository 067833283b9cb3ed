//! Path resolution for `cd` and `ls`.
//!
//! The simulated tree has exactly one level below the root `~`: every
//! registered directory sits directly under it. Resolution is a small rule
//! table over a tagged parse of the raw argument, so each edge case is
//! visible as one match arm.

use std::fmt;

use folio_registry::Directories;
use folio_types::error::{FolioError, Result};

/// Current working directory: the root, or one section below it.
///
/// A `Section` value always names an existing registry key; `cd` only
/// produces targets it has verified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cwd {
    #[default]
    Root,
    Section(String),
}

impl Cwd {
    /// The section name, or `None` at root.
    pub fn section(&self) -> Option<&str> {
        match self {
            Cwd::Root => None,
            Cwd::Section(name) => Some(name),
        }
    }
}

impl fmt::Display for Cwd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cwd::Root => write!(f, "~"),
            Cwd::Section(name) => write!(f, "~/{name}"),
        }
    }
}

/// What `ls` resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// List every registered directory name.
    Keys,
    /// List the entries of the named directory.
    Section(String),
}

/// Tagged parse of a raw path argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathArg<'a> {
    /// `~` or `~/`.
    Root,
    /// `..`.
    Parent,
    /// `~/<name>`, single segment.
    Prefixed(&'a str),
    /// `~/<a>/<b>...` -- more than one segment below the root.
    Nested,
    /// Anything else: a name with no prefix.
    Bare(&'a str),
}

fn parse(raw: &str) -> PathArg<'_> {
    match raw {
        "~" | "~/" => PathArg::Root,
        ".." => PathArg::Parent,
        _ => match raw.strip_prefix("~/") {
            Some(rest) if rest.contains('/') => PathArg::Nested,
            Some(rest) => PathArg::Prefixed(rest),
            None => PathArg::Bare(raw),
        },
    }
}

/// Resolve a `cd` argument to the new working directory.
///
/// An absent argument and `..` both go to the root (`..` at the root stays
/// there). A `~/`-prefixed or bare name changes into that directory from any
/// starting point, provided it is registered. Everything else is
/// `NoSuchDirectory`, reported with the literal argument.
pub fn resolve_cd(dirs: &dyn Directories, arg: Option<&str>) -> Result<Cwd> {
    let Some(raw) = arg else {
        return Ok(Cwd::Root);
    };
    match parse(raw) {
        PathArg::Parent => Ok(Cwd::Root),
        PathArg::Prefixed(name) | PathArg::Bare(name) if dirs.has(name) => {
            Ok(Cwd::Section(name.to_string()))
        },
        _ => Err(FolioError::NoSuchDirectory(raw.to_string())),
    }
}

/// Resolve an `ls` argument to what should be listed.
///
/// Unlike `cd`, a bare name only works from the root; inside a section the
/// only way back out is `..` or a `~`-anchored path. This asymmetry is
/// deliberate: relative bare names are only meaningful where the tree
/// actually branches.
pub fn resolve_ls(dirs: &dyn Directories, cwd: &Cwd, arg: Option<&str>) -> Result<Listing> {
    let Some(raw) = arg else {
        return Ok(match cwd {
            Cwd::Root => Listing::Keys,
            Cwd::Section(name) => Listing::Section(name.clone()),
        });
    };
    match parse(raw) {
        PathArg::Root => Ok(Listing::Keys),
        PathArg::Prefixed(name) if dirs.has(name) => Ok(Listing::Section(name.to_string())),
        PathArg::Bare(name) if *cwd == Cwd::Root && dirs.has(name) => {
            Ok(Listing::Section(name.to_string()))
        },
        PathArg::Parent if *cwd != Cwd::Root => Ok(Listing::Keys),
        _ => Err(FolioError::InvalidPath(raw.to_string())),
    }
}
