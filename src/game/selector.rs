//! Deterministic daily puzzle selection
//!
//! Every caller on the same UTC date gets the same puzzle with zero
//! coordination: index the catalog by day offset from a fixed epoch, modulo
//! the catalog length. The catalog repeats cyclically once exhausted.

use crate::core::{Puzzle, UtcDay};

/// Epoch the day offset is counted from (2025-01-01, before first deploy)
pub const EPOCH: UtcDay = UtcDay::from_ymd(2025, 1, 1);

/// Select the puzzle for a given UTC day
///
/// Uses a non-negative modulo so dates before the epoch still index the
/// catalog rather than panicking.
///
/// # Panics
/// Panics if `catalog` is empty. The embedded catalog is checked non-empty
/// at build time.
#[must_use]
pub fn puzzle_for(day: UtcDay, catalog: &[Puzzle]) -> &Puzzle {
    assert!(!catalog.is_empty(), "puzzle catalog must not be empty");
    let offset = day.days_since(EPOCH);
    let index = offset.rem_euclid(catalog.len() as i64) as usize;
    &catalog[index]
}
