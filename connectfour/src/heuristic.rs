use crate::{windows, Board, Cell, Config, Mark};

// Weights of the positional scorer. A completed run for the acting player
// dominates everything; an opponent run one move from completion must
// outrank every non-winning consideration so the minimizing ply reliably
// blocks it; smaller opponent threats carry intermediate penalties.
const COMPLETE: f64 = 1e6;
const NEAR_COMPLETE: f64 = 1.0;
const OPP_COMPLETE: f64 = 1e4;
const OPP_NEAR_COMPLETE: f64 = 1e2;
const OPP_PARTIAL: f64 = 1e1;

/// Positional desirability of `board` from `mark`'s perspective; positive
/// favors `mark`.
///
/// A pure function of its inputs: calling it twice on the same board yields
/// the same value.
pub fn heuristic(board: &Board, mark: Mark, config: &Config) -> f64 {
    let opp = mark.opponent();
    let k = config.inarow;

    let own_near = count_windows(board, k - 1, mark, config);
    let own_complete = count_windows(board, k, mark, config);
    let opp_partial = count_windows(board, k.saturating_sub(2), opp, config);
    let opp_near = count_windows(board, k - 1, opp, config);
    let opp_complete = count_windows(board, k, opp, config);

    NEAR_COMPLETE * own_near as f64 - OPP_PARTIAL * opp_partial as f64
        - OPP_NEAR_COMPLETE * opp_near as f64
        - OPP_COMPLETE * opp_complete as f64
        + COMPLETE * own_complete as f64
}

/// Counts windows holding exactly `occupancy` pieces of `piece` with every
/// remaining cell empty. Windows containing both marks count toward neither
/// player.
fn count_windows(board: &Board, occupancy: usize, piece: Mark, config: &Config) -> usize {
    windows(board, config)
        .filter(|w| {
            w.count(Cell::Taken(piece)) == occupancy
                && w.count(Cell::Empty) == config.inarow - occupancy
        })
        .count()
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn config() -> Config {
        Config::default()
    }

    fn bottom_row(marks: &[Mark]) -> Board {
        let mut board = Board::new(&config());
        for (col, &mark) in marks.iter().enumerate() {
            board = board.drop_piece(col, mark).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new(&config());
        assert_eq!(heuristic(&board, Mark::One, &config()), 0.0);
        assert_eq!(heuristic(&board, Mark::Two, &config()), 0.0);
    }

    #[test]
    fn open_three_scores_one() {
        // One window (columns 0..=3 of the bottom row) holds exactly three
        // own pieces plus an empty cell.
        let board = bottom_row(&[Mark::One, Mark::One, Mark::One]);
        assert_eq!(heuristic(&board, Mark::One, &config()), 1.0);
    }

    #[test]
    fn opponent_threats_are_penalized() {
        // From One's perspective, Two has an open three (columns 0..=3)
        // and an open two (columns 1..=4).
        let board = bottom_row(&[Mark::Two, Mark::Two, Mark::Two]);
        assert_eq!(heuristic(&board, Mark::One, &config()), -110.0);
    }

    #[test]
    fn completed_run_dominates_every_other_term() {
        // Four in a row plus the trailing open three at columns 1..=4.
        let board = bottom_row(&[Mark::One, Mark::One, Mark::One, Mark::One]);
        let score = heuristic(&board, Mark::One, &config());
        assert_eq!(score, 1_000_001.0);

        // Any board without a completed run for either player stays far
        // below the 1e6 term.
        let threats = bottom_row(&[Mark::One, Mark::One, Mark::One]);
        assert!(heuristic(&threats, Mark::One, &config()) < score - 900_000.0);
    }

    #[test]
    fn perspectives_are_asymmetric_in_weight() {
        let board = bottom_row(&[Mark::Two, Mark::Two, Mark::Two, Mark::Two]);
        // The mark that completed the run gets the bonus...
        assert_eq!(heuristic(&board, Mark::Two, &config()), 1_000_001.0);
        // ...while for the other mark the same board is a heavy penalty.
        assert_eq!(heuristic(&board, Mark::One, &config()), -10_110.0);
    }

    quickcheck! {
        fn heuristic_is_pure(board: Board) -> bool {
            let config = Config::default();
            heuristic(&board, Mark::One, &config) == heuristic(&board, Mark::One, &config)
        }
    }
}
