use tracing::{debug, info};

use crate::board::{Board, Cell};
use crate::errors::{JoinError, RejectionReason};
use crate::game::{GameState, Status};
use crate::player::{PlayerId, Role};
use crate::rules::{self, Move};

/// Pure state-transition engine for the cats-and-mouse game.
///
/// The engine never stores games. Each transition takes the current state by
/// reference and returns either a brand new state or a typed rejection, so a
/// host can persist only after a successful transition. Callers must serialize
/// transitions on the same game themselves.
///
/// # Examples
///
/// ```
/// use ratongato_engine::engine::Engine;
/// use ratongato_engine::game::Status;
/// use ratongato_engine::player::Role;
///
/// let engine = Engine::default();
/// let game = engine.new_game("alice".into());
/// assert_eq!(game.status(), Status::Created);
///
/// let game = engine.activate(&game, "bob".into()).unwrap();
/// let game = engine.apply_move(&game, Role::Cat, 0, 9).unwrap();
/// assert_eq!(game.turn(), Role::Mouse);
/// assert!(game.cat_positions().contains(9));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    board: Board,
}

impl Engine {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A `Created` game with the canonical layout and `cat_player` on the cat side.
    pub fn new_game(&self, cat_player: PlayerId) -> GameState {
        debug!(cat = %cat_player, "game created");
        GameState::new(cat_player)
    }

    /// Seats the mouse player and opens the game for moves.
    ///
    /// # Errors
    ///
    /// - [`JoinError::NotJoinable`] if the game is not `Created`
    /// - [`JoinError::SamePlayer`] if `mouse_player` already holds the cat side
    pub fn activate(
        &self,
        state: &GameState,
        mouse_player: PlayerId,
    ) -> Result<GameState, JoinError> {
        if state.status() != Status::Created {
            return Err(JoinError::NotJoinable {
                status: state.status(),
            });
        }
        if state.seats().cat() == &mouse_player {
            return Err(JoinError::SamePlayer);
        }
        info!(cat = %state.seats().cat(), mouse = %mouse_player, "game active");
        Ok(state.with_mouse_seated(mouse_player))
    }

    /// Validates and commits one move.
    ///
    /// On success the returned state has the piece relocated, the turn handed
    /// to the other side, and the status set to `Finished` if the mouse can no
    /// longer move. `state` itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as a [`RejectionReason`]; see
    /// [`rules::validate_move`] for the order.
    pub fn apply_move(
        &self,
        state: &GameState,
        role: Role,
        origin: Cell,
        target: Cell,
    ) -> Result<GameState, RejectionReason> {
        let validated = match rules::validate_move(&self.board, state, role, origin, target) {
            Ok(v) => v,
            Err(reason) => {
                debug!(%role, origin, target, %reason, "move rejected");
                return Err(reason);
            }
        };

        let next = state.with_move(validated.role, validated.origin, validated.target);
        let status = if rules::is_mouse_trapped(
            &self.board,
            next.cat_positions(),
            next.mouse_position(),
        ) {
            Status::Finished
        } else {
            Status::Active
        };
        debug!(%role, origin, target, direction = ?validated.direction, "move accepted");
        if status == Status::Finished {
            info!(
                moves = next.move_count(),
                mouse = next.mouse_position(),
                "mouse immobilized, game finished"
            );
        }
        Ok(next.with_status(status))
    }

    /// Applies a move on behalf of a seated player.
    ///
    /// # Errors
    ///
    /// A player not seated in this game gets [`RejectionReason::NotYourTurn`]
    /// (after the status check); otherwise as [`Engine::apply_move`].
    pub fn apply_move_as(
        &self,
        state: &GameState,
        player: &PlayerId,
        origin: Cell,
        target: Cell,
    ) -> Result<GameState, RejectionReason> {
        if !state.status().accepts_moves() {
            return Err(RejectionReason::GameNotActive);
        }
        let role = state
            .seats()
            .role_of(player)
            .ok_or(RejectionReason::NotYourTurn)?;
        self.apply_move(state, role, origin, target)
    }

    pub fn legal_moves(&self, state: &GameState, role: Role) -> Vec<Move> {
        rules::legal_moves(&self.board, state, role)
    }

    pub fn is_mouse_trapped(&self, state: &GameState) -> bool {
        rules::is_mouse_trapped(&self.board, state.cat_positions(), state.mouse_position())
    }
}
