//! Command-line interface for crossdrop.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crossdrop - solve crosswords by dragging word tiles onto the grid
#[derive(Parser, Debug)]
#[command(name = "crossdrop")]
#[command(about = "Drag-and-drop crossword board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a puzzle in the terminal UI
    Play {
        /// Path to an ipuz puzzle file
        puzzle: PathBuf,

        /// Path to the configuration file
        #[arg(short, long, default_value = "crossdrop.toml")]
        config: PathBuf,
    },

    /// Validate a puzzle file and print its words
    Check {
        /// Path to an ipuz puzzle file
        puzzle: PathBuf,

        /// Print the initial board view as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Also print the solution grid
        #[arg(long)]
        solution: bool,
    },
}
