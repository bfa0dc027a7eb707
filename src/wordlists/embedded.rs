//! Embedded word list and puzzle catalog
//!
//! Generated by build.rs from `data/words.txt` and `data/puzzles.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
