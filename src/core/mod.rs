//! Core domain types for the daily puzzle
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and testable without an HTTP layer.

mod date;
mod puzzle;
mod session;

pub use date::{DateParseError, UtcDay};
pub use puzzle::{LetterSet, Puzzle, PuzzleError};
pub use session::Session;
