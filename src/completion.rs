//! Path autocompletion: turn a partially typed path into candidate names.
//!
//! Structure:
//! - Trait: the filesystem collaborator (directory listing, home lookup)
//! - Pure functions: `~` expansion, parent/fragment split
//! - Engine: `suggest()`, which reads the filesystem through the trait
//!
//! Listing failures never surface as errors. A path that can't be listed
//! simply produces no suggestions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

// ============================================================================
// FILESYSTEM COLLABORATOR
// ============================================================================

/// The slice of the filesystem the completion engine needs.
pub trait Filesystem {
    /// Names of the entries in `path`, in whatever order the source yields them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// The user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The real filesystem, via `std::fs` and `dirs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Replace a leading `~` with the home directory.
///
/// Only the first character is considered: `~/src` and `~src` both expand,
/// `a/~` does not. Without a home directory the text is returned as-is.
pub fn expand_home(text: &str, home: Option<&Path>) -> String {
    match (text.strip_prefix('~'), home) {
        (Some(rest), Some(home)) => format!("{}{}", home.to_string_lossy(), rest),
        _ => text.to_string(),
    }
}

/// Split a path into the directory to list and the name prefix to match.
///
/// The split happens at the last separator, so a trailing separator
/// leaves an empty fragment: `a/b/` splits into (`a/b`, ``).
/// A bare name (no separator) lists the current directory.
pub fn split_fragment(path: &str) -> (PathBuf, String) {
    match path.rfind(std::path::is_separator) {
        Some(0) => (PathBuf::from("/"), path[1..].to_string()),
        Some(i) => (PathBuf::from(&path[..i]), path[i + 1..].to_string()),
        None => (PathBuf::from("."), path.to_string()),
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Compute completion candidates for the raw text of the path field.
///
/// 1. If the (home-expanded) text names a listable directory, every entry.
/// 2. Otherwise, entries of its parent whose name starts with the trailing
///    fragment (case-sensitive).
/// 3. If neither can be listed, nothing.
pub fn suggest(fs: &impl Filesystem, text: &str) -> Vec<String> {
    let expanded = expand_home(text, fs.home_dir().as_deref());

    if let Ok(entries) = fs.list_dir(Path::new(&expanded)) {
        debug!("{} entries in {:?}", entries.len(), expanded);
        return entries;
    }

    let (parent, fragment) = split_fragment(&expanded);
    match fs.list_dir(&parent) {
        Ok(entries) => {
            let matches: Vec<String> = entries
                .into_iter()
                .filter(|name| name.starts_with(&fragment))
                .collect();
            debug!(
                "{} entries in {} match {:?}",
                matches.len(),
                parent.display(),
                fragment
            );
            matches
        }
        Err(e) => {
            debug!("no suggestions for {:?}: {}", expanded, e);
            Vec::new()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
