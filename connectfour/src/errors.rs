/// The error type for [`Board::drop_piece()`](crate::Board::drop_piece) and
/// [`Board::lowest_open_row()`](crate::Board::lowest_open_row).
///
/// The search never produces this itself (it only visits legal columns), but
/// collaborators calling into the board directly get it instead of a panic.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    ColumnOutOfRange { col: usize, columns: usize },
    ColumnFull { col: usize },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::ColumnOutOfRange { col, columns } => write!(
                f,
                "Column {} is out of range for a board with {} columns",
                col, columns
            ),
            IllegalMove::ColumnFull { col } => write!(f, "Column {} is already full", col),
        }
    }
}

/// The error type for [`select_move()`](crate::select_move): the board has no
/// open column left. The caller should have detected game end beforehand.
#[derive(Debug, PartialEq, Eq)]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

impl std::fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There is no open column to play in")
    }
}

/// The error type for [`Config::validate()`](crate::Config::validate).
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidConfig {
    ZeroDimension,
    RunTooLong {
        inarow: usize,
        rows: usize,
        columns: usize,
    },
}

impl std::error::Error for InvalidConfig {}

impl std::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidConfig::ZeroDimension => {
                write!(f, "Rows, columns and run length must all be nonzero")
            }
            InvalidConfig::RunTooLong {
                inarow,
                rows,
                columns,
            } => write!(
                f,
                "A run of {} cannot fit on a {}x{} board in any direction",
                inarow, rows, columns
            ),
        }
    }
}

/// The error type for decoding a cell from its wire representation.
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidCellValue(pub u8);

impl std::error::Error for InvalidCellValue {}

impl std::fmt::Display for InvalidCellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a valid cell value (expected 0, 1 or 2)", self.0)
    }
}
