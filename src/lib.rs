//! Nyuki — daily Kiswahili spelling bee
//!
//! A small web game: every UTC day selects one puzzle (a center letter plus
//! six outer letters) from a fixed catalog, and players compose Kiswahili
//! words from those letters. Submissions are validated against an embedded
//! dictionary; score and rank live in a per-browser session that resets at
//! the day rollover.
//!
//! # Quick Start
//!
//! ```rust
//! use nyuki::core::UtcDay;
//! use nyuki::game::puzzle_for;
//! use nyuki::wordlists;
//!
//! let catalog = wordlists::catalog().unwrap();
//! let puzzle = puzzle_for(UtcDay::from_ymd(2025, 1, 1), &catalog);
//! assert_eq!(puzzle.center(), b'a');
//! ```

// Core domain types
pub mod core;

// Game logic: selection, validation, scoring
pub mod game;

// Embedded dictionary and puzzle catalog
pub mod wordlists;

// HTTP surface
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
