use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::errors::LayoutError;
use crate::player::{PlayerId, Role, Seats};
use crate::rules;

/// Cat cells of a freshly created game.
pub const START_CATS: [Cell; 4] = [0, 2, 4, 6];
/// Mouse cell of a freshly created game.
pub const START_MOUSE: Cell = 59;

/// Lifecycle of a game. Only ever moves forward: `Created -> Active -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Only the cat side is seated; no moves yet
    Created,
    /// Both sides seated; moves are accepted
    Active,
    /// The mouse was immobilized; read-only from here on
    Finished,
}

impl Status {
    pub fn accepts_moves(self) -> bool {
        self == Status::Active
    }

    pub fn is_terminal(self) -> bool {
        self == Status::Finished
    }
}

/// The four interchangeable cat cells.
///
/// Kept sorted so two states with the same cats compare equal no matter which
/// cat moved where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CatPositions([Cell; 4]);

impl CatPositions {
    pub fn new(mut cells: [Cell; 4]) -> Self {
        cells.sort_unstable();
        Self(cells)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }

    pub fn to_array(&self) -> [Cell; 4] {
        self.0
    }

    /// Returns the positions with the cat on `origin` relocated to `target`.
    pub fn moved(&self, origin: Cell, target: Cell) -> Self {
        let mut cells = self.0;
        if let Some(slot) = cells.iter_mut().find(|c| **c == origin) {
            *slot = target;
        }
        Self::new(cells)
    }
}

/// What sits on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Cat,
    Mouse,
}

/// Complete state of one game.
///
/// Every value of this type satisfies the placement invariant: the four cats
/// and the mouse sit on five distinct playable cells. States are never
/// mutated in place by the engine; each transition produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    cats: CatPositions,
    mouse: Cell,
    turn: Role,
    status: Status,
    seats: Seats,
    move_count: u32,
}

impl GameState {
    pub(crate) fn new(cat_player: PlayerId) -> Self {
        Self {
            cats: CatPositions::new(START_CATS),
            mouse: START_MOUSE,
            turn: Role::Cat,
            status: Status::Created,
            seats: Seats::new(cat_player),
            move_count: 0,
        }
    }

    /// Builds a state from an explicit placement, e.g. a persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when a piece is on an unplayable cell, two
    /// pieces share a cell, the mouse seat does not fit `status`, or `status`
    /// disagrees with whether the mouse is trapped.
    pub fn try_from_layout(
        seats: Seats,
        cats: [Cell; 4],
        mouse: Cell,
        turn: Role,
        status: Status,
    ) -> Result<Self, LayoutError> {
        let board = Board::new();
        check_layout(&board, &cats, mouse)?;
        check_status(&board, &seats, &CatPositions::new(cats), mouse, status)?;
        Ok(Self {
            cats: CatPositions::new(cats),
            mouse,
            turn,
            status,
            seats,
            move_count: 0,
        })
    }

    /// Like [`GameState::try_from_layout`] but treats an invalid layout as a
    /// broken caller contract.
    ///
    /// # Panics
    ///
    /// Panics if the layout violates the placement invariant.
    pub fn from_layout(
        seats: Seats,
        cats: [Cell; 4],
        mouse: Cell,
        turn: Role,
        status: Status,
    ) -> Self {
        match Self::try_from_layout(seats, cats, mouse, turn, status) {
            Ok(state) => state,
            Err(e) => panic!("invalid game layout: {}", e),
        }
    }

    pub fn cat_positions(&self) -> &CatPositions {
        &self.cats
    }

    pub fn mouse_position(&self) -> Cell {
        self.mouse
    }

    pub fn turn(&self) -> Role {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// Number of moves committed since creation (or since the layout was loaded).
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn occupant(&self, cell: Cell) -> Option<Occupant> {
        if self.mouse == cell {
            Some(Occupant::Mouse)
        } else if self.cats.contains(cell) {
            Some(Occupant::Cat)
        } else {
            None
        }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupant(cell).is_some()
    }

    /// Does `role` have a piece on `cell`?
    pub fn owns(&self, role: Role, cell: Cell) -> bool {
        match role {
            Role::Cat => self.cats.contains(cell),
            Role::Mouse => self.mouse == cell,
        }
    }

    pub(crate) fn with_mouse_seated(&self, mouse: PlayerId) -> Self {
        let mut next = self.clone();
        next.seats.seat_mouse(mouse);
        next.status = Status::Active;
        next
    }

    /// Relocates one piece and hands the turn over. Status is left to the caller.
    pub(crate) fn with_move(&self, role: Role, origin: Cell, target: Cell) -> Self {
        let mut next = self.clone();
        match role {
            Role::Cat => next.cats = self.cats.moved(origin, target),
            Role::Mouse => next.mouse = target,
        }
        next.turn = role.opponent();
        next.move_count = self.move_count.saturating_add(1);
        next
    }

    pub(crate) fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

fn check_layout(board: &Board, cats: &[Cell; 4], mouse: Cell) -> Result<(), LayoutError> {
    let mut seen = 0u64;
    for &cell in cats.iter().chain(std::iter::once(&mouse)) {
        if !board.is_playable(cell) {
            return Err(LayoutError::CellNotPlayable { cell });
        }
        if seen & (1u64 << cell) != 0 {
            return Err(LayoutError::DuplicateCell { cell });
        }
        seen |= 1u64 << cell;
    }
    Ok(())
}

// Created games have no mouse seat yet; later states need one. Finished
// holds exactly when the mouse is trapped.
fn check_status(
    board: &Board,
    seats: &Seats,
    cats: &CatPositions,
    mouse: Cell,
    status: Status,
) -> Result<(), LayoutError> {
    let seated = seats.mouse().is_some();
    if seated == (status == Status::Created) {
        return Err(LayoutError::SeatsMismatch { status });
    }
    if status != Status::Created
        && rules::is_mouse_trapped(board, cats, mouse) != (status == Status::Finished)
    {
        return Err(LayoutError::StatusMismatch { status });
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawGameState {
    cats: [Cell; 4],
    mouse: Cell,
    turn: Role,
    status: Status,
    seats: Seats,
    #[serde(default)]
    move_count: u32,
}

impl TryFrom<RawGameState> for GameState {
    type Error = LayoutError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let mut state =
            GameState::try_from_layout(raw.seats, raw.cats, raw.mouse, raw.turn, raw.status)?;
        state.move_count = raw.move_count;
        Ok(state)
    }
}
