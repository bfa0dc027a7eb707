//! Puzzle inspection command
//!
//! Shows which puzzle a date selects and what is achievable. The valid word
//! list itself is only printed on request; the HTTP surface never exposes it.

use crate::core::{Puzzle, UtcDay};
use crate::game;
use crate::wordlists::Dictionary;

/// What a given date's puzzle looks like
pub struct TodayReport {
    pub date_key: String,
    pub date_long: String,
    pub puzzle: Puzzle,
    pub total_possible: usize,
    pub max_score: u32,
    /// The valid words, present only with `--reveal`
    pub revealed: Option<Vec<String>>,
}

/// Build the report for a date
#[must_use]
pub fn today_report(
    day: UtcDay,
    catalog: &[Puzzle],
    dictionary: &Dictionary,
    reveal: bool,
) -> TodayReport {
    let puzzle = game::puzzle_for(day, catalog);
    let valid = game::valid_words(puzzle, dictionary);

    TodayReport {
        date_key: day.key(),
        date_long: day.long(),
        puzzle: *puzzle,
        total_possible: valid.len(),
        max_score: valid.len() as u32 * game::POINTS_CAP_PER_WORD,
        revealed: reveal.then(|| valid.iter().map(|w| (*w).to_string()).collect()),
    }
}
