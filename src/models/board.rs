use super::constants::{BOARD_SIZE, CELL_COUNT};
use super::errors::{GameError, GameResult};
use super::player::PlayerId;
use super::position::Position;

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(PlayerId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(*player),
        }
    }

    /// Single-character symbol, blank for an empty cell.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(player) => player.mark(),
        }
    }
}

/// The 3x3 playing grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Internal 0-based indexing: grid[row][col].
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.grid[pos.row()][pos.col()]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Mark an empty cell. An occupied cell is left untouched.
    pub fn place(&mut self, pos: Position, player: PlayerId) -> GameResult<()> {
        if !self.is_empty(pos) {
            return Err(GameError::OccupiedCell(pos));
        }
        self.grid[pos.row()][pos.col()] = Cell::Marked(player);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// All nine cells, row-major.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for pos in Position::all() {
            cells[pos.index()] = self.get(pos);
        }
        cells
    }

    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }
}
