use connectfour::{Board, Config, Mark, MoveResponse, Okay, Request};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, mark: Mark);
    fn play_turn(&mut self, board: Board, mark: Mark, config: &Config) -> MoveResponse;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because stdin.read_line() appends to the buffer
            use std::io::BufRead;
            let num_bytes_read = stdin.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the judge has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame { mark } => {
                    self.new_game(mark);
                    serde_json::to_writer(&mut stdout, &Okay())?;
                }
                Request::PlayTurn {
                    mark,
                    config,
                    board,
                } => {
                    let board = Board::from_cells(&config, board);
                    serde_json::to_writer(&mut stdout, &self.play_turn(board, mark, &config))?
                }
                Request::Bye => break Ok(()),
            }
            use std::io::Write;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }
}
