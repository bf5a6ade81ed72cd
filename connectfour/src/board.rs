use serde::{Deserialize, Serialize};

use crate::{Config, IllegalMove, InvalidCellValue};

/// A piece owner.
///
/// On the wire, marks are the numbers 1 and 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Mark {
    One,
    Two,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::One => Mark::Two,
            Mark::Two => Mark::One,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl From<Mark> for u8 {
    fn from(mark: Mark) -> u8 {
        match mark {
            Mark::One => 1,
            Mark::Two => 2,
        }
    }
}

impl TryFrom<u8> for Mark {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mark::One),
            2 => Ok(Mark::Two),
            other => Err(InvalidCellValue(other)),
        }
    }
}

/// One cell of the grid.
///
/// Deliberately an enum rather than a bare number, so that "empty" cannot be
/// confused with a mark by arithmetic. On the wire, a cell is 0, 1 or 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Cell {
    Empty,
    Taken(Mark),
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        match cell {
            Cell::Empty => 0,
            Cell::Taken(mark) => mark.into(),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            other => Ok(Cell::Taken(Mark::try_from(other)?)),
        }
    }
}

/// An R x C Connect Four grid, row 0 at the top.
///
/// Pieces are gravity-packed: below an occupied cell there is never an empty
/// one. [`Self::drop_piece()`] maintains this; boards built from collaborator
/// snapshots are trusted to satisfy it.
///
/// Boards are copy-on-write: `drop_piece` returns a new board, so search
/// branches never share mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Row-major, `rows * columns` entries.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the dimensions of `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            rows: config.rows,
            columns: config.columns,
            cells: vec![Cell::Empty; config.rows * config.columns],
        }
    }

    /// Creates a board from a flat row-major snapshot, as exchanged with
    /// collaborators.
    ///
    /// Panics if the snapshot does not have `rows * columns` cells.
    pub fn from_cells(config: &Config, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), config.rows * config.columns);
        Self {
            rows: config.rows,
            columns: config.columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.columns + col]
    }

    /// The flat row-major snapshot of this board.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// True iff `col` exists and its topmost cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.columns && self.get(0, col) == Cell::Empty
    }

    /// All columns a piece can currently be dropped into, left to right.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(|&col| self.is_valid_move(col))
    }

    /// The largest row index whose cell in `col` is still empty, i.e. where
    /// a dropped piece would land.
    pub fn lowest_open_row(&self, col: usize) -> Result<usize, IllegalMove> {
        if col >= self.columns {
            return Err(IllegalMove::ColumnOutOfRange {
                col,
                columns: self.columns,
            });
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(IllegalMove::ColumnFull { col })
    }

    /// Returns a new board with `mark` dropped into `col`. The original
    /// board is untouched.
    pub fn drop_piece(&self, col: usize, mark: Mark) -> Result<Board, IllegalMove> {
        let row = self.lowest_open_row(col)?;
        let mut next = self.clone();
        next.cells[row * next.columns + col] = Cell::Taken(mark);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn pieces_stack_from_the_bottom() {
        let board = Board::new(&config());
        assert_eq!(board.lowest_open_row(3), Ok(5));

        let board = board.drop_piece(3, Mark::One).unwrap();
        assert_eq!(board.get(5, 3), Cell::Taken(Mark::One));
        assert_eq!(board.lowest_open_row(3), Ok(4));

        let board = board.drop_piece(3, Mark::Two).unwrap();
        assert_eq!(board.get(4, 3), Cell::Taken(Mark::Two));
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn drop_does_not_mutate_the_input() {
        let board = Board::new(&config());
        let _next = board.drop_piece(0, Mark::One).unwrap();
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn full_column_is_rejected() {
        let mut board = Board::new(&config());
        for _ in 0..6 {
            board = board.drop_piece(2, Mark::One).unwrap();
        }
        assert!(!board.is_valid_move(2));
        assert_eq!(
            board.drop_piece(2, Mark::Two),
            Err(IllegalMove::ColumnFull { col: 2 })
        );
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let board = Board::new(&config());
        assert!(!board.is_valid_move(7));
        assert_eq!(
            board.lowest_open_row(7),
            Err(IllegalMove::ColumnOutOfRange { col: 7, columns: 7 })
        );
    }

    #[test]
    fn cell_wire_values_round_trip() {
        for value in 0..=2u8 {
            assert_eq!(u8::from(Cell::try_from(value).unwrap()), value);
        }
        assert_eq!(Cell::try_from(3), Err(InvalidCellValue(3)));
    }

    quickcheck! {
        fn drop_fills_exactly_one_cell(board: Board, col: usize) -> TestResult {
            let col = col % board.columns();
            if !board.is_valid_move(col) {
                return TestResult::discard();
            }
            let landing_row = board.lowest_open_row(col).unwrap();
            let next = board.drop_piece(col, Mark::One).unwrap();
            let landed = next.get(landing_row, col) == Cell::Taken(Mark::One);
            let open_row_moved_up = match next.lowest_open_row(col) {
                Ok(row) => row < landing_row,
                Err(IllegalMove::ColumnFull { .. }) => landing_row == 0,
                Err(_) => false,
            };
            TestResult::from_bool(
                landed && open_row_moved_up && next.piece_count() == board.piece_count() + 1,
            )
        }
    }
}
