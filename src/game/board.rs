use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    /// True only when the cell holds a token belonging to `player`.
    /// An empty cell never matches.
    pub fn is_held_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom; column 0 is the
/// left edge.
///
/// Tokens only enter through [`Board::drop_piece`], so every column stays
/// packed from the bottom row upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Read-only snapshot of the grid, top row first
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Whether a token can still be dropped into `col`. Out-of-range columns
    /// are reported as closed.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Number of tokens stacked in `col`
    pub fn column_height(&self, col: usize) -> usize {
        if col >= COLS {
            return 0;
        }
        (0..ROWS)
            .filter(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Columns that still accept a token, left to right
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(|&col| self.is_column_open(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.open_columns().next().is_none()
    }

    /// Drop a token for `player` into `col` and return the row where it
    /// landed.
    ///
    /// Callers check [`Board::is_column_open`] first; a closed column yields
    /// `None` and leaves the grid untouched.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Option<usize> {
        if col >= COLS {
            return None;
        }

        // Scan from the bottom row upward for the first free slot
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)?;
        self.cells[row][col] = Cell::Occupied(player);
        Some(row)
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Build a board from a top-to-bottom diagram where `.` is empty, `1` is
    /// player one and `2` is player two. Gravity is not checked.
    #[cfg(test)]
    pub(crate) fn from_diagram(diagram: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, line) in diagram.iter().enumerate() {
            assert_eq!(line.len(), COLS, "row {row} must have {COLS} cells");
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    '1' => Cell::Occupied(Player::One),
                    '2' => Cell::Occupied(Player::Two),
                    other => panic!("unexpected cell {other:?}"),
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
