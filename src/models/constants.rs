pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Lowest and highest position id a player can type.
pub const MIN_POSITION_ID: i64 = 1;
pub const MAX_POSITION_ID: i64 = CELL_COUNT as i64;

pub const HEADER_WIDTH: usize = 100;

/// A line of three cells, as indices into the row-major flattened board.
pub type Line = [usize; 3];

pub const HORIZONTAL_LINES: [Line; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
pub const VERTICAL_LINES: [Line; 3] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
pub const DIAGONAL_LINES: [Line; 2] = [[0, 4, 8], [2, 4, 6]];

pub const NUM_LINES: usize = 8;

/// Every winning line: rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; NUM_LINES] = [
    HORIZONTAL_LINES[0],
    HORIZONTAL_LINES[1],
    HORIZONTAL_LINES[2],
    VERTICAL_LINES[0],
    VERTICAL_LINES[1],
    VERTICAL_LINES[2],
    DIAGONAL_LINES[0],
    DIAGONAL_LINES[1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Horizontal,
    Vertical,
    Diagonal,
}

impl LineKind {
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Horizontal => "row",
            LineKind::Vertical => "column",
            LineKind::Diagonal => "diagonal",
        }
    }

    /// Classify one of the entries of [`WINNING_LINES`].
    pub fn of(line: &Line) -> LineKind {
        if HORIZONTAL_LINES.contains(line) {
            LineKind::Horizontal
        } else if VERTICAL_LINES.contains(line) {
            LineKind::Vertical
        } else {
            LineKind::Diagonal
        }
    }
}
