//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ratongato",
    version,
    about = "Cats vs. mouse on the dark squares of a checkerboard"
)]
pub struct RatonGatoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a hot-seat game in this terminal
    Play {
        /// Name of the cat player (overrides configuration)
        #[arg(long)]
        cat: Option<String>,
        /// Name of the mouse player (overrides configuration)
        #[arg(long)]
        mouse: Option<String>,
        /// Append accepted moves to this JSONL file
        #[arg(long)]
        record: Option<String>,
        /// Show the legal moves before every prompt
        #[arg(long)]
        hints: bool,
    },
    /// Replay a recorded move log from a fresh game
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Check that every move in a log is legal and in order
    Verify {
        #[arg(long)]
        input: Option<String>,
    },
    /// Show the board with playable cell numbers
    Board,
    /// Show the resolved configuration and where each value came from
    Cfg,
}
