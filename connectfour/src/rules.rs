use crate::{windows, Board, Config, Mark};

/// True iff play must stop: the board is full, or either mark has completed
/// a run of `config.inarow`.
///
/// This does not say who won; use [`has_won()`] for attribution.
pub fn is_terminal(board: &Board, config: &Config) -> bool {
    if board.legal_moves().next().is_none() {
        return true;
    }
    windows(board, config).any(|w| w.is_run_of(Mark::One) || w.is_run_of(Mark::Two))
}

/// True iff `mark` has a completed run somewhere on the board.
pub fn has_won(board: &Board, mark: Mark, config: &Config) -> bool {
    windows(board, config).any(|w| w.is_run_of(mark))
}
