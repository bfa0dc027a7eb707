//! Terminal output formatting for CLI commands

use crate::commands::{CheckReport, TodayReport};
use colored::Colorize;

/// Print the server startup banner
pub fn print_serving(addr: &str) {
    println!(
        "🐝 {} http://{addr}",
        "Nyuki serving on".bright_yellow().bold()
    );
}

/// Print a puzzle report for one date
pub fn print_today_report(report: &TodayReport) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Puzzle for {} ({})",
        report.date_long.bright_yellow().bold(),
        report.date_key
    );
    println!("{}", "─".repeat(50).cyan());

    println!("\nLetters:        {}", report.puzzle.to_string().bold());
    println!("Valid words:    {}", report.total_possible);
    println!("Max score:      {}", report.max_score);

    if let Some(words) = &report.revealed {
        println!("\n{}", "Valid words (spoilers!):".red().bold());
        for word in words {
            println!("  {word}");
        }
    }
}

/// Print the game data check result
pub fn print_check_report(report: &CheckReport) {
    println!(
        "Checked {} words, {} puzzles",
        report.word_count, report.puzzle_count
    );

    if report.is_ok() {
        println!("{}", "✅ Game data OK".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} issue(s) found", report.issues.len())
                .red()
                .bold()
        );
        for issue in &report.issues {
            println!("  - {issue}");
        }
    }
}
