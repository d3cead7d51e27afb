//! `board` command: cell numbering and the starting position.

use crate::error::CliError;
use crate::formatters::{format_board, format_cell_map};
use ratongato_engine::engine::Engine;
use std::io::Write;

pub fn handle_board_command(out: &mut dyn Write) -> Result<(), CliError> {
    let engine = Engine::default();
    writeln!(out, "Cell numbers (dark squares only):")?;
    write!(out, "{}", format_cell_map(engine.board()))?;
    writeln!(out)?;
    writeln!(out, "Starting position (C = cat, M = mouse):")?;
    let game = engine.new_game("cat".into());
    write!(out, "{}", format_board(engine.board(), &game))?;
    writeln!(
        out,
        "Cats move diagonally downward only. The mouse moves diagonally in any direction."
    )?;
    writeln!(out, "The cats win when the mouse has no free square to step to.")?;
    Ok(())
}
