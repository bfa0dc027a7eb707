//! Build script to generate embedded game data
//!
//! Reads the dictionary and puzzle catalog files and generates Rust source
//! code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Accepted Kiswahili words",
    );

    generate_puzzle_catalog("data/puzzles.txt", &Path::new(&out_dir).join("puzzles.rs"));

    // Rebuild if game data changes
    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/puzzles.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

/// Catalog lines are `<center> <outer letters>`, e.g. `a mcekbh`.
fn generate_puzzle_catalog(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| {
            line.split_once(' ')
                .unwrap_or_else(|| panic!("Malformed puzzle line in {input_path}: {line:?}"))
        })
        .collect();
    let count = entries.len();
    assert!(count > 0, "Puzzle catalog {input_path} is empty");

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle catalog").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Puzzle catalog as (center, outer letters) pairs").unwrap();
    writeln!(output, "pub const PUZZLES: &[(&str, &str)] = &[").unwrap();

    for (center, outer) in entries {
        writeln!(output, "    (\"{center}\", \"{outer}\"),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of puzzles in PUZZLES").unwrap();
    writeln!(output, "pub const PUZZLES_COUNT: usize = {count};").unwrap();
}
