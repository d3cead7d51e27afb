//! # Play Command
//!
//! Hot-seat game on one terminal: both players share the keyboard and take
//! turns typing moves.
//!
//! ## Features
//!
//! - Move entry as `ORIGIN TARGET`, optionally prefixed with `cat`/`mouse`
//! - `moves` lists the legal moves for the side to move; `--hints` shows them
//!   before every prompt
//! - Rejected moves are explained and re-prompted, the game is unchanged
//! - Graceful quit with `q` or end of input
//! - Optional JSONL recording of accepted moves (`--record FILE`)

use crate::config;
use crate::counter;
use crate::error::CliError;
use crate::formatters::{
    format_board, format_move, format_moves, format_rejection, format_summary,
};
use crate::io_utils::read_stdin_line;
use crate::record::MoveLogger;
use crate::ui;
use crate::validation::{ParseResult, parse_move_input, validate_player_names};
use ratongato_engine::engine::Engine;
use ratongato_engine::game::{GameState, Status};
use ratongato_engine::player::{PlayerId, Role};
use ratongato_engine::rules::Move;
use std::io::{BufRead, Write};
use tracing::debug;

/// Handle the play command.
///
/// Player names given as flags win over configuration; `hints` is on when
/// either the flag or the configuration asks for it.
///
/// # Errors
///
/// - `CliError::Config` if configuration cannot be loaded
/// - `CliError::InvalidInput` if the player names are empty or identical
/// - `CliError::Io` if the move log cannot be created or output fails
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(None, None, None, false, &mut input, &mut stdout(), &mut stderr()).unwrap();
/// ```
pub fn handle_play_command(
    cat: Option<String>,
    mouse: Option<String>,
    record: Option<String>,
    hints: bool,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let cat = cat.unwrap_or(cfg.cat_player);
    let mouse = mouse.unwrap_or(cfg.mouse_player);
    let hints = hints || cfg.hints;

    if let Err(msg) = validate_player_names(&cat, &mouse) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let mut logger = match &record {
        Some(path) => MoveLogger::create(path)?,
        None => MoveLogger::disabled(),
    };

    let engine = Engine::default();
    let game = engine.new_game(PlayerId::from(cat));
    let game = engine.activate(&game, PlayerId::from(mouse))?;

    writeln!(
        out,
        "play: cat={} mouse={}",
        game.seats().cat(),
        seat_of(&game, Role::Mouse)
    )?;
    if let Some(path) = &record {
        writeln!(out, "Recording moves to {}", path)?;
    }
    writeln!(
        out,
        "Enter moves as 'ORIGIN TARGET' (e.g. 0 9), 'moves' for options, 'q' to quit."
    )?;
    write!(out, "{}", format_board(engine.board(), &game))?;

    let session = run_session(&engine, game, hints, &mut logger, input, out, err)?;

    writeln!(out, "Moves played: {}", session.played)?;
    writeln!(
        out,
        "Move requests: {} (process total {})",
        session.requests,
        counter::current()
    )?;
    writeln!(out, "{}", format_summary(&session.game))?;
    Ok(())
}

struct Session {
    game: GameState,
    played: u32,
    requests: u64,
}

fn run_session(
    engine: &Engine,
    mut game: GameState,
    hints: bool,
    logger: &mut MoveLogger,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Session, CliError> {
    let mut played = 0u32;
    let mut requests = 0u64;

    while game.status() == Status::Active {
        let turn = game.turn();
        let legal = engine.legal_moves(&game, turn);
        if legal.is_empty() {
            ui::display_warning(
                err,
                &format!("{} has no legal moves; the game cannot continue", turn),
            )?;
            break;
        }
        if hints {
            writeln!(out, "Legal moves: {}", format_moves(&legal))?;
        }

        let player = seat_of(&game, turn);
        ui::prompt(out, &format!("{} ({}) move: ", player, turn))?;
        let Some(line) = read_stdin_line(input) else {
            // end of input
            writeln!(out)?;
            break;
        };
        if line.is_empty() {
            continue;
        }

        match parse_move_input(&line) {
            ParseResult::Quit => break,
            ParseResult::ListMoves => {
                writeln!(out, "Legal moves: {}", format_moves(&legal))?;
            }
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
            }
            ParseResult::Move {
                role,
                origin,
                target,
            } => {
                requests += 1;
                let total = counter::inc();
                let role = role.unwrap_or(turn);
                debug!(%role, origin, target, total, "move request");

                match engine.apply_move(&game, role, origin, target) {
                    Ok(next) => {
                        let rec = logger.record(&seat_of(&game, role), role, origin, target)?;
                        played += 1;
                        game = next;
                        let m = Move {
                            role,
                            origin,
                            target,
                        };
                        writeln!(out, "#{} {}", rec.seq, format_move(&m))?;
                        write!(out, "{}", format_board(engine.board(), &game))?;
                        writeln!(out, "{}", format_summary(&game))?;
                    }
                    Err(reason) => {
                        let msg = format!("Move rejected: {}", format_rejection(reason));
                        ui::write_error(err, &msg)?;
                    }
                }
            }
        }
    }

    Ok(Session {
        game,
        played,
        requests,
    })
}

fn seat_of(game: &GameState, role: Role) -> PlayerId {
    match role {
        Role::Cat => game.seats().cat().clone(),
        Role::Mouse => game
            .seats()
            .mouse()
            .cloned()
            .unwrap_or_else(|| PlayerId::from("mouse")),
    }
}
