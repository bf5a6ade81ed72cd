use rand::seq::SliceRandom;
use rand::Rng;

use crate::{heuristic, is_terminal, Board, Config, IllegalMove, Mark, NoLegalMove};

/// Search depth the stock agent uses when the caller does not choose one.
pub const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Depth-bounded two-player adversarial search.
///
/// The heuristic is always evaluated from `mark`'s perspective, never
/// flipped per ply; the maximizing and minimizing roles alternate over that
/// single scale. No pruning and no memoization: every node up to the depth
/// bound is visited, so a call costs at most `columns^depth` node visits.
pub fn minimax(board: &Board, depth: usize, maximizing: bool, mark: Mark, config: &Config) -> f64 {
    if depth == 0 || is_terminal(board, config) {
        return heuristic(board, mark, config);
    }
    let to_place = if maximizing { mark } else { mark.opponent() };
    let mut value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for col in board.legal_moves() {
        let child = board
            .drop_piece(col, to_place)
            .expect("legal_moves() returned a full column");
        let score = minimax(&child, depth - 1, !maximizing, mark, config);
        value = if maximizing {
            value.max(score)
        } else {
            value.min(score)
        };
    }
    value
}

/// The value of dropping `mark` into `col` and then searching `depth - 1`
/// further plies, with the opponent to move.
pub fn score_move(
    board: &Board,
    col: usize,
    mark: Mark,
    config: &Config,
    depth: usize,
) -> Result<f64, IllegalMove> {
    let next = board.drop_piece(col, mark)?;
    Ok(minimax(&next, depth.saturating_sub(1), false, mark, config))
}

/// Scores every legal column for `mark`, in column order.
pub fn score_moves(board: &Board, mark: Mark, config: &Config, depth: usize) -> Vec<(usize, f64)> {
    board
        .legal_moves()
        .map(|col| {
            let score = score_move(board, col, mark, config, depth)
                .expect("legal_moves() returned a full column");
            (col, score)
        })
        .collect()
}

/// Picks a column for `mark`: the best-scoring one, with ties broken
/// uniformly at random so the agent is not deterministically exploitable.
///
/// The random source is caller-supplied; a seeded rng makes the whole
/// selection reproducible.
pub fn select_move(
    board: &Board,
    mark: Mark,
    config: &Config,
    depth: usize,
    rng: &mut impl Rng,
) -> Result<usize, NoLegalMove> {
    let scores = score_moves(board, mark, config, depth);
    let best = scores
        .iter()
        .map(|&(_, score)| score)
        .fold(f64::NEG_INFINITY, f64::max);
    let top_choices: Vec<usize> = scores
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(col, _)| col)
        .collect();
    top_choices.choose(rng).copied().ok_or(NoLegalMove)
}
