//! Nyuki - CLI
//!
//! Serves the daily Kiswahili spelling-bee game over HTTP, with helper
//! commands to inspect puzzles and validate the game data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nyuki::{
    commands::{run_check, run_serve, today_report},
    core::{Puzzle, UtcDay},
    output::{print_check_report, print_today_report},
    wordlists::{self, Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "nyuki",
    about = "Daily Kiswahili spelling-bee word game served over HTTP",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the game server (default)
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Show the puzzle selected for a date
    Today {
        /// Date as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        date: Option<String>,

        /// Also list the valid words (spoilers)
        #[arg(long)]
        reveal: bool,
    },

    /// Validate the dictionary and puzzle catalog
    Check,
}

fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Ok(Dictionary::embedded()),
        path => load_from_file(path).with_context(|| format!("failed to load wordlist {path}")),
    }
}

fn load_catalog() -> Result<Vec<Puzzle>> {
    wordlists::catalog().context("invalid embedded puzzle catalog")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let catalog = load_catalog()?;

    // Default to serving if no command given
    let command = cli.command.unwrap_or(Commands::Serve {
        bind: "0.0.0.0".to_string(),
        port: 8080,
    });

    match command {
        Commands::Serve { bind, port } => run_serve(dictionary, catalog, &bind, port),
        Commands::Today { date, reveal } => {
            let day = match date {
                Some(s) => s.parse::<UtcDay>()?,
                None => UtcDay::today(),
            };
            let report = today_report(day, &catalog, &dictionary, reveal);
            print_today_report(&report);
            Ok(())
        }
        Commands::Check => {
            let report = run_check(&dictionary, &catalog);
            print_check_report(&report);
            if report.is_ok() {
                Ok(())
            } else {
                anyhow::bail!("game data check failed")
            }
        }
    }
}
