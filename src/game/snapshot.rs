//! Player-facing view of the current game state
//!
//! Both endpoints report the same numbers; this assembles them in one place.

use super::score;
use crate::core::Session;

/// Everything the client needs to render score, rank, and progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub found_count: usize,
    pub score: u32,
    pub total_possible: usize,
    pub rank: &'static str,
    pub progress: u8,
}

/// Build the view for a session against today's valid-word count
#[must_use]
pub fn snapshot(session: &Session, total_possible: usize) -> GameView {
    GameView {
        found_count: session.found_count(),
        score: session.score(),
        total_possible,
        rank: score::rank(session.score(), total_possible),
        progress: score::progress(session.found_count(), total_possible),
    }
}
