//! Verify command handler module.
//!
//! Strict validation of a JSONL move log. Every line is checked and all
//! problems are collected before reporting:
//!
//! - Each line is a well-formed move record
//! - Sequence numbers run 1, 2, 3, ... without gaps or repeats
//! - The recorded role matches the seat of the recorded player
//! - The engine accepts every move in order
//! - Nothing is recorded after the game finished
//!
//! Errors are collected using the shared `BatchValidationError` pattern for structured reporting.

use crate::error::{BatchValidationError, CliError};
use crate::formatters::{format_summary, rejection_code};
use crate::io_utils::read_text_auto;
use crate::record::{parse_lines, seat_players};
use ratongato_engine::engine::Engine;
use ratongato_engine::game::GameState;
use ratongato_engine::player::PlayerId;
use std::collections::BTreeSet;
use std::io::Write;

/// The context names where a problem was found, e.g. `line 4`.
type VerifyError = BatchValidationError<String>;

/// Handle the verify command.
///
/// # Returns
///
/// `Ok(())` if all checks pass, otherwise an `Err` that maps to exit code `2`.
///
/// # Example
///
/// ```no_run
/// # use std::io;
/// # use ratongato_cli::run;
/// let code = run(["ratongato", "verify", "--input", "games/game.jsonl"], &mut io::stdout(), &mut io::stderr());
/// ```
pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input)?;
    let (game, moves, errors) = verify_log(&content);

    if errors.is_empty() {
        writeln!(out, "Verify: OK (moves={})", moves)?;
        if let Some(game) = game {
            writeln!(out, "{}", format_summary(&game))?;
        }
        return Ok(());
    }

    writeln!(out, "Verify: FAIL (moves={})", moves)?;
    writeln!(err)?;
    writeln!(err, "Errors found:")?;
    for error in &errors {
        writeln!(err, "  {}", error)?;
    }
    writeln!(err)?;
    let bad_items: BTreeSet<&str> = errors.iter().map(|e| e.item_context.as_str()).collect();
    writeln!(
        err,
        "Summary: {} error(s) in {} moves ({} distinct locations)",
        errors.len(),
        moves,
        bad_items.len()
    )?;
    Err(CliError::InvalidInput(format!(
        "{} validation errors found",
        errors.len()
    )))
}

/// Checks a whole log. Returns the final state (when seats could be set up),
/// the number of records read, and every problem found.
fn verify_log(content: &str) -> (Option<GameState>, usize, Vec<VerifyError>) {
    let mut errors: Vec<VerifyError> = Vec::new();
    let parsed = parse_lines(content);
    let moves = parsed.len();

    let records = parsed.iter().filter_map(|(_, r)| r.as_ref().ok());
    let (cat, mouse) = seat_players(records, "cat", "mouse");

    let engine = Engine::default();
    let game = engine.new_game(cat);
    let mut game = match engine.activate(&game, mouse) {
        Ok(g) => g,
        Err(e) => {
            errors.push(VerifyError {
                item_context: "log".to_string(),
                message: format!("cannot seat players: {}", e),
            });
            return (None, moves, errors);
        }
    };

    let mut expected_seq = 1u32;
    for (line, result) in &parsed {
        let context = format!("line {}", line);
        let rec = match result {
            Ok(rec) => rec,
            Err(msg) => {
                errors.push(VerifyError {
                    item_context: context,
                    message: format!("invalid record: {}", msg),
                });
                continue;
            }
        };

        if rec.seq != expected_seq {
            errors.push(VerifyError {
                item_context: context.clone(),
                message: format!("sequence number {}, expected {}", rec.seq, expected_seq),
            });
        }
        expected_seq = rec.seq.saturating_add(1);

        if game.status().is_terminal() {
            errors.push(VerifyError {
                item_context: context,
                message: format!("move #{} recorded after the game finished", rec.seq),
            });
            continue;
        }

        let player = PlayerId::from(rec.player.as_str());
        match game.seats().role_of(&player) {
            Some(role) if role != rec.role => {
                errors.push(VerifyError {
                    item_context: context.clone(),
                    message: format!(
                        "player '{}' holds the {} seat but the record says {}",
                        rec.player, role, rec.role
                    ),
                });
            }
            Some(_) => {}
            None => {
                errors.push(VerifyError {
                    item_context: context.clone(),
                    message: format!("player '{}' is not seated in this game", rec.player),
                });
                continue;
            }
        }

        match engine.apply_move_as(&game, &player, rec.origin, rec.target) {
            Ok(next) => game = next,
            Err(reason) => errors.push(VerifyError {
                item_context: context,
                message: format!(
                    "move #{} ({} -> {}) rejected: {}",
                    rec.seq,
                    rec.origin,
                    rec.target,
                    rejection_code(reason)
                ),
            }),
        }
    }

    (Some(game), moves, errors)
}
