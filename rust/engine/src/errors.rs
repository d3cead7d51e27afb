use thiserror::Error;

use crate::board::Cell;
use crate::game::Status;

/// Why a move attempt was refused. The state it was checked against is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Game is not active")]
    GameNotActive,
    #[error("Not your turn, or no piece of yours on the origin cell")]
    NotYourTurn,
    #[error("Target cell is occupied")]
    TargetOccupied,
    #[error("Target is not a diagonal neighbor of the origin")]
    NotAdjacentDiagonal,
    #[error("Direction not allowed for this role")]
    IllegalDirectionForRole,
    #[error("Cell is off the board or not a playable square")]
    OffBoardOrUnplayableCell,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    #[error("Game cannot be joined in status {status:?}")]
    NotJoinable { status: Status },
    #[error("Mouse player must differ from the cat player")]
    SamePlayer,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Cell {cell} is not a playable square")]
    CellNotPlayable { cell: Cell },
    #[error("Cell {cell} holds more than one piece")]
    DuplicateCell { cell: Cell },
    #[error("Seat assignment does not fit status {status:?}")]
    SeatsMismatch { status: Status },
    #[error("Status {status:?} contradicts whether the mouse can move")]
    StatusMismatch { status: Status },
}
