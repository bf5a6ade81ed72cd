use connectfour::{
    has_won, is_terminal, visualize_board, Board, Config, IllegalMove, Mark, MoveResponse, Okay,
    Request,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::player::Player;

pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalMove },
}

/// Returns an error only on communication failure, not when an
/// illegal move is played.
pub fn play_game(
    rng: &mut StdRng,
    player_1: &mut Player,
    player_2: &mut Player,
    config: &Config,
) -> anyhow::Result<GameResult> {
    // Randomly decide which bot plays which mark
    let [player_1_mark, player_2_mark] = {
        let mut arr = [Mark::One, Mark::Two];
        arr.shuffle(rng);
        arr
    };

    let mut players = [(player_1, player_1_mark), (player_2, player_2_mark)];

    // Inform the players about the new game, so that they can reset their state
    for (player, mark) in players.iter_mut() {
        let _: Okay = player.perform_request(&Request::NewGame { mark: *mark })?;
    }

    // Mark one always moves first
    let mut current_player_idx = if player_1_mark == Mark::One { 0 } else { 1 };
    let mut board = Board::new(config);

    loop {
        let (player, mark) = &mut players[current_player_idx];
        let req = Request::PlayTurn {
            mark: *mark,
            config: *config,
            board: board.cells().to_vec(),
        };
        let MoveResponse(col) = player.perform_request(&req)?;
        board = match board.drop_piece(col, *mark) {
            Ok(next) => next,
            Err(err) => {
                return Ok(GameResult::IllegalMoveByPlayer {
                    player_idx: current_player_idx,
                    err,
                })
            }
        };
        debug!(player = &player.name, col);
        debug!("\n{}", visualize_board(&board));

        if has_won(&board, *mark, config) {
            return Ok(GameResult::WonByPlayer {
                player_idx: current_player_idx,
            });
        }
        if is_terminal(&board, config) {
            return Ok(GameResult::Tie);
        }
        current_player_idx = 1 - current_player_idx;
    }
}
