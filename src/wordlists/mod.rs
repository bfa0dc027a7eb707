//! Embedded game data: the Kiswahili dictionary and the puzzle catalog
//!
//! Both lists are compiled into the binary and never mutated at runtime. A
//! custom dictionary file can be swapped in via the loader.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{PUZZLES, PUZZLES_COUNT, WORDS, WORDS_COUNT};

use crate::core::{Puzzle, PuzzleError};

/// Parse the embedded puzzle catalog
///
/// # Errors
/// Returns `PuzzleError` if any embedded entry violates the puzzle
/// invariants. With shipped data this only fires when the catalog file is
/// edited badly, so callers treat it as a startup failure.
pub fn catalog() -> Result<Vec<Puzzle>, PuzzleError> {
    PUZZLES
        .iter()
        .map(|&(center, outer)| Puzzle::parse(center, outer))
        .collect()
}
