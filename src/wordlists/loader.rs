//! Word list loading utilities
//!
//! Lets deployments swap in a custom dictionary file without rebuilding.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines are skipped and entries are lowercased; lines containing
/// non-letter characters are dropped rather than treated as errors.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;

    let words = content.lines().map(str::trim).filter(|line| {
        !line.is_empty()
            && line
                .chars()
                .all(|c| c.is_ascii_alphabetic())
    });

    Ok(Dictionary::from_words(words))
}
