use serde::{Deserialize, Serialize};

/// A square of the 8x8 grid in row-major order (`row * 8 + col`).
pub type Cell = u8;

pub const BOARD_SIZE: u8 = 8;
pub const NUM_CELLS: u8 = BOARD_SIZE * BOARD_SIZE;
pub const PLAYABLE_CELLS: usize = 32;

/// One of the four diagonal steps, named relative to row 0 being "up".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Raw row-major index offset of a single step.
    pub fn offset(self) -> i8 {
        match self {
            Direction::UpLeft => -9,
            Direction::UpRight => -7,
            Direction::DownLeft => 7,
            Direction::DownRight => 9,
        }
    }

    /// Downward steps move away from row 0.
    pub fn is_downward(self) -> bool {
        matches!(self, Direction::DownLeft | Direction::DownRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Direction::UpLeft | Direction::DownLeft)
    }
}

/// The four diagonal neighbors of a cell. `None` means off-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub up_left: Option<Cell>,
    pub up_right: Option<Cell>,
    pub down_left: Option<Cell>,
    pub down_right: Option<Cell>,
}

impl Neighbors {
    pub fn get(&self, dir: Direction) -> Option<Cell> {
        match dir {
            Direction::UpLeft => self.up_left,
            Direction::UpRight => self.up_right,
            Direction::DownLeft => self.down_left,
            Direction::DownRight => self.down_right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<Cell>)> + '_ {
        Direction::ALL.into_iter().map(move |dir| (dir, self.get(dir)))
    }

    /// Only the neighbors that exist on the board.
    pub fn on_board(&self) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        self.iter()
            .filter_map(|(dir, cell)| cell.map(|cell| (dir, cell)))
    }
}

/// Static board topology: which cells are playable and how they connect.
///
/// The board holds no game state, so one instance can be shared by any number
/// of games and threads.
///
/// # Examples
///
/// ```
/// use ratongato_engine::board::Board;
///
/// let board = Board::new();
/// assert!(board.is_playable(0));
/// assert!(!board.is_playable(1));
///
/// let n = board.diagonal_neighbors(0);
/// assert_eq!(n.down_right, Some(9));
/// assert_eq!(n.down_left, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Bit `i` is set when cell `i` is a dark square
    playable: u64,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            playable: playable_mask(),
        }
    }

    /// True for the 32 dark squares, where `row + col` is even.
    pub fn is_playable(&self, cell: Cell) -> bool {
        cell < NUM_CELLS && (self.playable & bit(cell)) != 0
    }

    pub fn playable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..NUM_CELLS).filter(move |&cell| self.is_playable(cell))
    }

    /// The cell one diagonal step away, or `None` when the step leaves the
    /// board or wraps around a column edge.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        if cell >= NUM_CELLS {
            return None;
        }
        let col = cell % BOARD_SIZE;
        if dir.is_left() && col == 0 {
            return None;
        }
        if !dir.is_left() && col == BOARD_SIZE - 1 {
            return None;
        }
        let raw = i16::from(cell) + i16::from(dir.offset());
        if (0..i16::from(NUM_CELLS)).contains(&raw) {
            Some(raw as Cell)
        } else {
            None
        }
    }

    pub fn diagonal_neighbors(&self, cell: Cell) -> Neighbors {
        Neighbors {
            up_left: self.neighbor(cell, Direction::UpLeft),
            up_right: self.neighbor(cell, Direction::UpRight),
            down_left: self.neighbor(cell, Direction::DownLeft),
            down_right: self.neighbor(cell, Direction::DownRight),
        }
    }

    /// The direction of a single diagonal step from `origin` to `target`, if any.
    pub fn direction_between(&self, origin: Cell, target: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.neighbor(origin, dir) == Some(target))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub fn cell_at(row: u8, col: u8) -> Option<Cell> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Some(row * BOARD_SIZE + col)
    } else {
        None
    }
}

const fn playable_mask() -> u64 {
    let mut mask = 0u64;
    let mut cell = 0u8;
    while cell < NUM_CELLS {
        if (cell / BOARD_SIZE + cell % BOARD_SIZE) % 2 == 0 {
            mask |= 1u64 << cell;
        }
        cell += 1;
    }
    mask
}

fn bit(cell: Cell) -> u64 {
    1u64 << cell
}
