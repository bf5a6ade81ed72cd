use crate::{Board, Cell, Config, Mark};

/// A contiguous run of `inarow` cells in one of the four scan directions.
///
/// This is a view into a board, not a copy; the cells are read on demand.
#[derive(Clone, Copy)]
pub struct Window<'a> {
    board: &'a Board,
    row: usize,
    col: usize,
    row_step: isize,
    col_step: isize,
    len: usize,
}

impl<'a> Window<'a> {
    /// The cells of this window, from its origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + 'a {
        let Window {
            board,
            row,
            col,
            row_step,
            col_step,
            len,
        } = *self;
        (0..len).map(move |i| {
            let r = (row as isize + row_step * i as isize) as usize;
            let c = (col as isize + col_step * i as isize) as usize;
            board.get(r, c)
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&c| c == cell).count()
    }

    /// True iff every cell of this window belongs to `mark`.
    pub fn is_run_of(&self, mark: Mark) -> bool {
        self.cells().all(|c| c == Cell::Taken(mark))
    }
}

/// Enumerates every window of length `config.inarow` on the board:
/// horizontal (left to right), vertical (top to bottom), "\" diagonals and
/// "/" diagonals.
///
/// The iterator is lazy and restartable. For an R x C board with run length
/// K it yields `R*(C-K+1) + (R-K+1)*C + 2*(R-K+1)*(C-K+1)` windows, where
/// negative factors clamp to zero.
pub fn windows<'a>(board: &'a Board, config: &Config) -> impl Iterator<Item = Window<'a>> + 'a {
    let len = config.inarow;
    let rows = board.rows();
    let columns = board.columns();
    // Number of valid window origins along each axis.
    let col_starts = columns.saturating_sub(len - 1);
    let row_starts = rows.saturating_sub(len - 1);

    let window = move |row, col, row_step, col_step| Window {
        board,
        row,
        col,
        row_step,
        col_step,
        len,
    };

    let horizontal =
        (0..rows).flat_map(move |row| (0..col_starts).map(move |col| window(row, col, 0, 1)));
    let vertical =
        (0..row_starts).flat_map(move |row| (0..columns).map(move |col| window(row, col, 1, 0)));
    let diagonal_down =
        (0..row_starts).flat_map(move |row| (0..col_starts).map(move |col| window(row, col, 1, 1)));
    let diagonal_up = (len - 1..rows)
        .flat_map(move |row| (0..col_starts).map(move |col| window(row, col, -1, 1)));

    horizontal
        .chain(vertical)
        .chain(diagonal_down)
        .chain(diagonal_up)
}
