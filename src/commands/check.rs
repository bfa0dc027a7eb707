//! Game data validation command
//!
//! Catches bad edits to the word list or puzzle catalog before they ship:
//! every puzzle must be solvable and every dictionary entry must be a plain
//! lowercase word.

use crate::core::Puzzle;
use crate::game;
use crate::wordlists::Dictionary;

/// Result of validating the game data
pub struct CheckReport {
    pub word_count: usize,
    pub puzzle_count: usize,
    pub issues: Vec<String>,
}

impl CheckReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate the dictionary and puzzle catalog
#[must_use]
pub fn run_check(dictionary: &Dictionary, catalog: &[Puzzle]) -> CheckReport {
    let mut issues = Vec::new();

    for word in dictionary.iter() {
        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            issues.push(format!("Dictionary word {word:?} is not lowercase letters"));
        }
    }

    for (i, puzzle) in catalog.iter().enumerate() {
        let solvable = game::valid_words(puzzle, dictionary).len();
        if solvable == 0 {
            issues.push(format!("Puzzle {i} ({puzzle}) has no valid words"));
        }
    }

    CheckReport {
        word_count: dictionary.len(),
        puzzle_count: catalog.len(),
        issues,
    }
}
