//! Seed list loading
//!
//! Reads the initial URL list from a line-delimited file. The content is
//! split on `\n` without trimming or filtering, so a trailing newline yields
//! a final empty-string entry. That entry is a legitimate seed: it builds a
//! task with an empty domain, which the domain gate later discards.

use std::io;
use std::path::Path;

/// Loads seed URL strings from a line-delimited file
pub fn load_seeds(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.split('\n').map(str::to_string).collect())
}
