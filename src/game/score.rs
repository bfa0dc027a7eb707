//! Rank and progress calculation
//!
//! Rank is a named tier derived from the score as a percentage of the total
//! achievable points. Total achievable is `valid word count * 5`, a per-word
//! cap heuristic carried over from the original scoring table.

/// Per-word cap used to derive total achievable points
pub const POINTS_CAP_PER_WORD: u32 = 5;

/// Rank shown when the puzzle has no valid words at all
pub const LOWEST_RANK: &str = "Beginner";

/// Rank tiers as (minimum percentage, name), highest first
const TIERS: [(u32, &str); 8] = [
    (100, "Bingwa Mkuu"),
    (70, "Bingwa"),
    (50, "Hodari"),
    (40, "Mzuri"),
    (25, "Vizuri"),
    (15, "Mbaya si"),
    (8, "Mwanzo Mzuri"),
    (0, "Mwanzo"),
];

/// Map a cumulative score to a rank tier
///
/// `total_possible` is the number of valid words for today's puzzle. A total
/// of zero short-circuits to [`LOWEST_RANK`] so there is no division by zero.
#[must_use]
pub fn rank(score: u32, total_possible: usize) -> &'static str {
    if total_possible == 0 {
        return LOWEST_RANK;
    }
    let cap = total_possible as f64 * f64::from(POINTS_CAP_PER_WORD);
    let percentage = f64::from(score) / cap * 100.0;

    TIERS
        .iter()
        .find(|&&(threshold, _)| percentage >= f64::from(threshold))
        .map_or(TIERS[TIERS.len() - 1].1, |&(_, name)| name)
}

/// 0-10 discretized completion indicator for the progress bar
///
/// `floor(found / max(1, total) * 10)`, clamped to 10. The `max(1, _)`
/// guards the zero-denominator case.
#[must_use]
pub fn progress(found: usize, total_possible: usize) -> u8 {
    let filled = found * 10 / total_possible.max(1);
    filled.min(10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_lowest_rank() {
        assert_eq!(rank(0, 0), "Beginner");
        assert_eq!(rank(50, 0), "Beginner");
    }

    #[test]
    fn zero_score_is_bottom_tier() {
        assert_eq!(rank(0, 20), "Mwanzo");
    }

    #[test]
    fn full_score_is_top_tier() {
        // total 20 words: cap = 100 points
        assert_eq!(rank(100, 20), "Bingwa Mkuu");
        assert_eq!(rank(150, 20), "Bingwa Mkuu");
    }

    #[test]
    fn tier_boundaries() {
        // total 20 words: cap = 100, so score == percentage
        assert_eq!(rank(99, 20), "Bingwa");
        assert_eq!(rank(70, 20), "Bingwa");
        assert_eq!(rank(69, 20), "Hodari");
        assert_eq!(rank(50, 20), "Hodari");
        assert_eq!(rank(49, 20), "Mzuri");
        assert_eq!(rank(40, 20), "Mzuri");
        assert_eq!(rank(39, 20), "Vizuri");
        assert_eq!(rank(25, 20), "Vizuri");
        assert_eq!(rank(24, 20), "Mbaya si");
        assert_eq!(rank(15, 20), "Mbaya si");
        assert_eq!(rank(14, 20), "Mwanzo Mzuri");
        assert_eq!(rank(8, 20), "Mwanzo Mzuri");
        assert_eq!(rank(7, 20), "Mwanzo");
    }

    #[test]
    fn progress_empty_and_full() {
        assert_eq!(progress(0, 20), 0);
        assert_eq!(progress(20, 20), 10);
        assert_eq!(progress(25, 20), 10); // clamped
    }

    #[test]
    fn progress_is_floored() {
        assert_eq!(progress(1, 20), 0);
        assert_eq!(progress(2, 20), 1);
        assert_eq!(progress(19, 20), 9);
    }

    #[test]
    fn progress_zero_total_guarded() {
        assert_eq!(progress(0, 0), 0);
        assert_eq!(progress(3, 0), 10); // 3 * 10 / 1, clamped
    }
}
