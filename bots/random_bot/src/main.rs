use connectfour::{Board, Config, Mark, MoveResponse};
use connectfour_bot_utils::Bot;
use rand::{rngs::ThreadRng, seq::SliceRandom};

fn main() -> anyhow::Result<()> {
    RandomBot {
        rng: rand::thread_rng(),
    }
    .run()
}

struct RandomBot {
    rng: ThreadRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, _mark: Mark) {}

    fn play_turn(&mut self, board: Board, _mark: Mark, _config: &Config) -> MoveResponse {
        let legal_columns: Vec<usize> = board.legal_moves().collect();
        let col = legal_columns
            .choose(&mut self.rng)
            .expect("Asked to play a turn on a full board");
        MoveResponse(*col)
    }
}
