//! Board, move and status formatters for terminal display.
//!
//! Pure functions, no I/O. The board is drawn with row 0 (the cats' home row)
//! at the top:
//!
//! - `C` cat
//! - `M` mouse
//! - `.` free dark square
//! - blank for a light square, which no piece can ever reach
//!
//! ## Example
//!
//! ```rust
//! use ratongato_engine::board::Board;
//! use ratongato_engine::engine::Engine;
//! use ratongato_cli::formatters::format_board;
//!
//! let engine = Engine::default();
//! let game = engine.new_game("alice".into());
//! let text = format_board(&Board::new(), &game);
//! assert!(text.lines().nth(1).unwrap().contains("C   C   C   C"));
//! ```

use ratongato_engine::board::{BOARD_SIZE, Board, cell_at};
use ratongato_engine::errors::RejectionReason;
use ratongato_engine::game::{GameState, Occupant, Status};
use ratongato_engine::player::Role;
use ratongato_engine::rules::Move;

/// Draws the current position, one row per line, under a column header.
pub fn format_board(board: &Board, state: &GameState) -> String {
    render_grid(board, |cell| match state.occupant(cell) {
        Some(Occupant::Cat) => " C".to_string(),
        Some(Occupant::Mouse) => " M".to_string(),
        None => " .".to_string(),
    })
}

/// Draws the board with the number of every playable cell, as used for move input.
pub fn format_cell_map(board: &Board) -> String {
    render_grid(board, |cell| format!("{:>2}", cell))
}

fn render_grid<F>(board: &Board, mut dark: F) -> String
where
    F: FnMut(u8) -> String,
{
    let mut s = String::from("   ");
    for col in 0..BOARD_SIZE {
        s.push_str(&format!("{:>2}", col));
    }
    s.push('\n');

    for row in 0..BOARD_SIZE {
        s.push_str(&format!("{:>2} ", row));
        for col in 0..BOARD_SIZE {
            match cell_at(row, col) {
                Some(cell) if board.is_playable(cell) => s.push_str(&dark(cell)),
                _ => s.push_str("  "),
            }
        }
        // keep lines free of trailing blanks
        let trimmed = s.trim_end_matches(' ').len();
        s.truncate(trimmed);
        s.push('\n');
    }
    s
}

pub fn format_role(role: Role) -> &'static str {
    role.as_str()
}

pub fn format_status(status: Status) -> &'static str {
    match status {
        Status::Created => "waiting for the mouse player",
        Status::Active => "in progress",
        Status::Finished => "finished",
    }
}

/// One-line summary shown after every accepted move.
pub fn format_summary(state: &GameState) -> String {
    match state.status() {
        Status::Finished => format!(
            "Game over after {} moves: the mouse on {} cannot move. Cats win.",
            state.move_count(),
            state.mouse_position()
        ),
        status => format!(
            "Moves: {} | Turn: {} | Status: {}",
            state.move_count(),
            format_role(state.turn()),
            format_status(status)
        ),
    }
}

/// Stable identifier of a rejection reason, as written in verification reports.
pub fn rejection_code(reason: RejectionReason) -> &'static str {
    match reason {
        RejectionReason::GameNotActive => "GameNotActive",
        RejectionReason::NotYourTurn => "NotYourTurn",
        RejectionReason::TargetOccupied => "TargetOccupied",
        RejectionReason::NotAdjacentDiagonal => "NotAdjacentDiagonal",
        RejectionReason::IllegalDirectionForRole => "IllegalDirectionForRole",
        RejectionReason::OffBoardOrUnplayableCell => "OffBoardOrUnplayableCell",
    }
}

pub fn format_rejection(reason: RejectionReason) -> String {
    format!("{} ({})", reason, rejection_code(reason))
}

pub fn format_move(m: &Move) -> String {
    format!("{} {} -> {}", format_role(m.role), m.origin, m.target)
}

/// Compact comma-separated list, e.g. `0-9, 2-9, 2-11`.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| format!("{}-{}", m.origin, m.target))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratongato_engine::engine::Engine;
    use ratongato_engine::player::Seats;

    #[test]
    fn start_position_rows() {
        let engine = Engine::default();
        let game = engine.new_game("alice".into());
        let text = format_board(engine.board(), &game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], " 0  C   C   C   C");
        assert_eq!(lines[2], " 1    .   .   .   .");
        assert_eq!(lines[8], " 7    .   M   .   .");
    }

    #[test]
    fn cell_map_numbers_every_dark_square() {
        let board = Board::new();
        let text = format_cell_map(&board);
        for cell in board.playable_cells() {
            let padded = format!("{:>2}", cell);
            assert!(text.contains(&padded), "cell {} missing", cell);
        }
        assert!(text.lines().nth(8).unwrap().ends_with("63"));
    }

    #[test]
    fn summary_reports_game_over() {
        let engine = Engine::default();
        let game = GameState::from_layout(
            Seats::with_mouse("c".into(), "m".into()),
            [41, 52, 4, 6],
            59,
            Role::Cat,
            Status::Active,
        );
        let done = engine.apply_move(&game, Role::Cat, 41, 50).unwrap();
        assert!(format_summary(&done).contains("Game over"));
        assert!(format_summary(&game).contains("Turn: cat"));
    }

    #[test]
    fn move_formats() {
        let moves = [
            Move {
                role: Role::Cat,
                origin: 0,
                target: 9,
            },
            Move {
                role: Role::Cat,
                origin: 2,
                target: 11,
            },
        ];
        assert_eq!(format_move(&moves[0]), "cat 0 -> 9");
        assert_eq!(format_moves(&moves), "0-9, 2-11");
        assert_eq!(format_moves(&[]), "");
    }

    #[test]
    fn rejection_codes_match_variant_names() {
        assert_eq!(rejection_code(RejectionReason::NotYourTurn), "NotYourTurn");
        assert!(format_rejection(RejectionReason::TargetOccupied).ends_with("(TargetOccupied)"));
    }
}
