//! Crossdrop - Unified CLI
//!
//! Loads an ipuz crossword and either plays it in the terminal or checks it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use crossdrop_puzzle::{BoardSession, Coord, Puzzle, SessionOptions};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { puzzle, config } => run_play(puzzle, config),
        Command::Check {
            puzzle,
            json,
            solution,
        } => run_check(puzzle, json, solution),
    }
}

/// Run the interactive board
fn run_play(puzzle: PathBuf, config: PathBuf) -> Result<()> {
    let config = AppConfig::load_or_default(&config)?;
    let puzzle = load_puzzle(&puzzle)?;
    let session = BoardSession::new(puzzle, config.session_options())?;
    tui::run_tui(session, config.log_file())
}

/// Validate a puzzle and print it
#[instrument(skip_all, fields(puzzle = %path.display()))]
fn run_check(path: PathBuf, json: bool, solution: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let puzzle = load_puzzle(&path)?;
    info!(words = puzzle.words().len(), "Puzzle is valid");

    if json {
        let session = BoardSession::new(puzzle.clone(), SessionOptions::default())?;
        println!("{}", serde_json::to_string_pretty(&session.view())?);
    } else {
        print!("{}", summary(&puzzle));
    }
    if solution {
        print!("{}", solution_grid(&puzzle));
    }
    Ok(())
}

fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle file {}", path.display()))?;
    Puzzle::from_ipuz_str(&json).with_context(|| format!("Invalid puzzle {}", path.display()))
}

fn summary(puzzle: &Puzzle) -> String {
    let mut out = format!(
        "{} ({}x{}, {} words)\n",
        puzzle.title().unwrap_or("Untitled"),
        puzzle.cols(),
        puzzle.rows(),
        puzzle.words().len()
    );
    if let Some(author) = puzzle.author() {
        out.push_str(&format!("  by {}\n", author));
    }
    for word in puzzle.words() {
        out.push_str(&format!(
            "  {:<8} {:<10} {:<10} {}\n",
            word.id.as_str(),
            word.orientation.to_string(),
            word.start().to_string(),
            word.text
        ));
    }
    out
}

fn solution_grid(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    for row in 0..puzzle.rows() {
        let line: String = (0..puzzle.cols())
            .map(|col| puzzle.letter_at(Coord::new(row, col)).unwrap_or('#'))
            .collect();
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORCHARD: &str = include_str!("../../../puzzles/orchard.ipuz");

    #[test]
    fn test_summary_lists_every_word() {
        let puzzle = Puzzle::from_ipuz_str(ORCHARD).unwrap();
        let text = summary(&puzzle);
        assert!(text.starts_with("Orchard (10x10, 8 words)"));
        assert!(text.contains("1-A"));
        assert!(text.contains("PEAR"));
        assert_eq!(text.lines().nth(1), Some("  by crossdrop"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_solution_grid_marks_blocks() {
        let puzzle = Puzzle::from_ipuz_str(ORCHARD).unwrap();
        let grid = solution_grid(&puzzle);
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[1], "#APPLE####");
        assert_eq!(rows[7], "##CAR#####");
    }
}
