//! Replay command handler.
//!
//! Re-plays a recorded move log against a fresh game and shows where it ends
//! up. Replay is lenient: unreadable lines and moves the engine refuses are
//! reported on stderr and skipped. Use `verify` for a strict check.
//!
//! Seats are recovered from the log itself (first player seen moving for
//! each side). Plain and `.zst` compressed logs are both accepted.

use crate::error::CliError;
use crate::formatters::{format_board, format_rejection, format_summary};
use crate::io_utils::read_text_auto;
use crate::record::{MoveRecord, seat_players};
use crate::ui;
use ratongato_engine::engine::Engine;
use ratongato_engine::player::PlayerId;
use std::io::Write;

/// Handle the replay command.
///
/// # Errors
///
/// `CliError::Io` if the log cannot be read, `CliError::Engine` if the log
/// names the same player for both sides.
pub fn handle_replay_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input)?;

    let mut records: Vec<MoveRecord> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: MoveRecord = parse_json_or_continue!(line, err, format!("line {}", i + 1));
        records.push(record);
    }

    if records.is_empty() {
        writeln!(out, "No moves found in {}", input)?;
        return Ok(());
    }

    let (cat, mouse) = seat_players(&records, "cat", "mouse");
    writeln!(out, "replay: {} (cat={} mouse={})", input, cat, mouse)?;

    let engine = Engine::default();
    let game = engine.new_game(cat);
    let mut game = engine.activate(&game, mouse)?;

    let mut applied = 0u32;
    let mut rejected = 0u32;
    for rec in &records {
        let player = PlayerId::from(rec.player.as_str());
        match engine.apply_move_as(&game, &player, rec.origin, rec.target) {
            Ok(next) => {
                writeln!(
                    out,
                    "#{} {} ({}): {} -> {}",
                    rec.seq, rec.player, rec.role, rec.origin, rec.target
                )?;
                game = next;
                applied += 1;
            }
            Err(reason) => {
                rejected += 1;
                ui::display_warning(
                    err,
                    &format!(
                        "move #{} skipped ({} -> {}): {}",
                        rec.seq,
                        rec.origin,
                        rec.target,
                        format_rejection(reason)
                    ),
                )?;
            }
        }
    }

    write!(out, "{}", format_board(engine.board(), &game))?;
    writeln!(out, "{}", format_summary(&game))?;
    writeln!(out, "Replayed: {} moves ({} rejected)", applied, rejected)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(content: &str) -> (Result<(), CliError>, String, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.jsonl");
        std::fs::write(&path, content).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_replay_command(path.to_string_lossy().to_string(), &mut out, &mut err);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn skips_bad_lines_and_rejected_moves() {
        let content = concat!(
            "{\"seq\":1,\"player\":\"tom\",\"role\":\"cat\",\"origin\":0,\"target\":9}\n",
            "garbage\n",
            "{\"seq\":2,\"player\":\"tom\",\"role\":\"cat\",\"origin\":2,\"target\":11}\n",
            "{\"seq\":3,\"player\":\"jerry\",\"role\":\"mouse\",\"origin\":59,\"target\":50}\n",
        );
        let (res, out, err) = replay(content);
        assert!(res.is_ok());
        assert!(err.contains("Failed to parse line 2"));
        assert!(err.contains("NotYourTurn"));
        assert!(out.contains("#3 jerry (mouse): 59 -> 50"));
        assert!(out.contains("Replayed: 2 moves (1 rejected)"));
    }

    #[test]
    fn empty_log_is_not_an_error() {
        let (res, out, _) = replay("\n\n");
        assert!(res.is_ok());
        assert!(out.contains("No moves found"));
    }
}
