//! Input parsing and validation for interactive commands.
//!
//! This module turns what a player types at the prompt into a move request
//! and checks player names before a game is set up. It handles:
//! - Move entry ("0 9", "0-9", "cat 0 9", "m 59 50")
//! - Prompt commands ("moves", "q")
//! - Player name validation for configuration and `play` flags
//!
//! Only the shape of the input is checked here. Whether a move is legal is
//! the engine's call.

use ratongato_engine::player::Role;

/// Result of parsing one line typed at the move prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A move request. `role` is set when the player named a side explicitly.
    Move {
        role: Option<Role>,
        origin: u8,
        target: u8,
    },
    /// List the legal moves for the side to move
    ListMoves,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a move request or a prompt command.
///
/// Accepts the following input formats (case-insensitive):
/// - "0 9", "0-9", "0,9" → move from cell 0 to cell 9
/// - "cat 0 9" or "c 0 9" → same, claiming the cat side
/// - "mouse 59 50" or "m 59 50" → move claiming the mouse side
/// - "moves" or "?" → list legal moves
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use ratongato_cli::validation::{parse_move_input, ParseResult};
/// use ratongato_engine::player::Role;
///
/// assert_eq!(
///     parse_move_input("0 9"),
///     ParseResult::Move { role: None, origin: 0, target: 9 }
/// );
///
/// assert_eq!(
///     parse_move_input("mouse 59-50"),
///     ParseResult::Move { role: Some(Role::Mouse), origin: 59, target: 50 }
/// );
///
/// assert_eq!(parse_move_input("q"), ParseResult::Quit);
///
/// match parse_move_input("jump") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" | "exit" if parts.len() == 1 => return ParseResult::Quit,
        "moves" | "?" if parts.len() == 1 => return ParseResult::ListMoves,
        _ => {}
    }

    let (role, cells) = match parts[0] {
        "c" | "cat" => (Some(Role::Cat), &parts[1..]),
        "m" | "mouse" => (Some(Role::Mouse), &parts[1..]),
        _ => (None, &parts[..]),
    };

    if cells.len() != 2 {
        return ParseResult::Invalid(format!(
            "Unrecognized input '{}'. Enter two cells like '0 9', 'moves', or 'q'",
            input
        ));
    }

    let origin = match parse_cell(cells[0]) {
        Ok(c) => c,
        Err(msg) => return ParseResult::Invalid(msg),
    };
    let target = match parse_cell(cells[1]) {
        Ok(c) => c,
        Err(msg) => return ParseResult::Invalid(msg),
    };

    ParseResult::Move {
        role,
        origin,
        target,
    }
}

// Out-of-range numbers that still fit a u8 are passed through so the engine
// can report them; only text that is not a cell number at all stops here.
fn parse_cell(s: &str) -> Result<u8, String> {
    s.parse::<u8>()
        .map_err(|_| format!("Invalid cell '{}': expected a number from 0 to 63", s))
}

/// Checks that both player names are usable and refer to different people.
///
/// # Example
///
/// ```rust
/// # use ratongato_cli::validation::validate_player_names;
/// assert!(validate_player_names("alice", "bob").is_ok());
/// assert!(validate_player_names("alice", "alice").is_err());
/// assert!(validate_player_names("  ", "bob").is_err());
/// ```
pub fn validate_player_names(cat: &str, mouse: &str) -> Result<(), String> {
    if cat.trim().is_empty() {
        return Err("cat player name must not be empty".to_string());
    }
    if mouse.trim().is_empty() {
        return Err("mouse player name must not be empty".to_string());
    }
    if cat == mouse {
        return Err(format!(
            "cat and mouse must be different players (both are '{}')",
            cat
        ));
    }
    Ok(())
}
