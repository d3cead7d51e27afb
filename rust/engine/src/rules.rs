use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Direction, NUM_CELLS};
use crate::errors::RejectionReason;
use crate::game::{CatPositions, GameState};
use crate::player::Role;

/// A move request: one piece of `role` stepping from `origin` to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub role: Role,
    pub origin: Cell,
    pub target: Cell,
}

/// A move that passed every rule check against a particular state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    pub role: Role,
    pub origin: Cell,
    pub target: Cell,
    pub direction: Direction,
}

/// Checks a proposed move against `state` without changing anything.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the game is active
/// 2. both cells are on the board and the origin is a playable square
/// 3. it is `role`'s turn and `role` has a piece on `origin`
/// 4. `target` is empty
/// 5. `target` is one diagonal step from `origin`
/// 6. the step is allowed for `role` (cats only move downward)
///
/// A dark square's diagonal neighbors are always dark, so a light-square
/// target on the board fails step 5.
///
/// # Errors
///
/// Returns the [`RejectionReason`] of the first failed check.
///
/// # Examples
///
/// ```
/// use ratongato_engine::board::Board;
/// use ratongato_engine::engine::Engine;
/// use ratongato_engine::errors::RejectionReason;
/// use ratongato_engine::player::Role;
/// use ratongato_engine::rules::validate_move;
///
/// let engine = Engine::default();
/// let game = engine.new_game("alice".into());
/// let game = engine.activate(&game, "bob".into()).unwrap();
/// let board = Board::new();
///
/// assert!(validate_move(&board, &game, Role::Cat, 0, 9).is_ok());
/// assert_eq!(
///     validate_move(&board, &game, Role::Mouse, 59, 50),
///     Err(RejectionReason::NotYourTurn)
/// );
/// ```
pub fn validate_move(
    board: &Board,
    state: &GameState,
    role: Role,
    origin: Cell,
    target: Cell,
) -> Result<ValidatedMove, RejectionReason> {
    if !state.status().accepts_moves() {
        return Err(RejectionReason::GameNotActive);
    }
    if origin >= NUM_CELLS || target >= NUM_CELLS || !board.is_playable(origin) {
        return Err(RejectionReason::OffBoardOrUnplayableCell);
    }
    if role != state.turn() || !state.owns(role, origin) {
        return Err(RejectionReason::NotYourTurn);
    }
    if state.is_occupied(target) {
        return Err(RejectionReason::TargetOccupied);
    }
    let direction = board
        .direction_between(origin, target)
        .ok_or(RejectionReason::NotAdjacentDiagonal)?;
    if !may_step(role, direction) {
        return Err(RejectionReason::IllegalDirectionForRole);
    }
    Ok(ValidatedMove {
        role,
        origin,
        target,
        direction,
    })
}

/// Directional restriction per role. Edge columns are already handled by the board.
pub fn may_step(role: Role, direction: Direction) -> bool {
    match role {
        Role::Cat => direction.is_downward(),
        Role::Mouse => true,
    }
}

/// True when every diagonal neighbor of `mouse` is off the board or holds a cat.
pub fn is_mouse_trapped(board: &Board, cats: &CatPositions, mouse: Cell) -> bool {
    board
        .diagonal_neighbors(mouse)
        .iter()
        .all(|(_, neighbor)| neighbor.map_or(true, |cell| cats.contains(cell)))
}

/// Every move `role` could make right now. Empty when it is not `role`'s turn
/// or the game is not active.
pub fn legal_moves(board: &Board, state: &GameState, role: Role) -> Vec<Move> {
    if !state.status().accepts_moves() || state.turn() != role {
        return Vec::new();
    }
    let origins: Vec<Cell> = match role {
        Role::Cat => state.cat_positions().iter().collect(),
        Role::Mouse => vec![state.mouse_position()],
    };
    let mut moves = Vec::new();
    for origin in origins {
        for (_, target) in board.diagonal_neighbors(origin).on_board() {
            if validate_move(board, state, role, origin, target).is_ok() {
                moves.push(Move {
                    role,
                    origin,
                    target,
                });
            }
        }
    }
    moves
}
