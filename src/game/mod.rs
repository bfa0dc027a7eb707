//! Game logic: daily puzzle selection, word validation, scoring
//!
//! Everything here is a pure function over the static dictionary and catalog
//! plus an explicit session, so the whole game is testable without HTTP.

pub mod score;
pub mod selector;
pub mod snapshot;
pub mod validate;

pub use score::{POINTS_CAP_PER_WORD, progress, rank};
pub use selector::{EPOCH, puzzle_for};
pub use snapshot::{GameView, snapshot};
pub use validate::{Accepted, MIN_WORD_LEN, Rejection, submit, valid_words};
