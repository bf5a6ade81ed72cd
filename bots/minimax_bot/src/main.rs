use clap::Parser;
use connectfour::{
    score_moves, select_move, Board, Config, Mark, MoveResponse, DEFAULT_SEARCH_DEPTH,
};
use connectfour_bot_utils::Bot;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How many plies to search ahead
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: usize,

    /// RNG seed for the tie-break among equal-scored columns
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

struct MinimaxBot {
    rng: StdRng,
    depth: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    MinimaxBot {
        rng,
        depth: args.depth,
    }
    .run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

impl Bot for MinimaxBot {
    fn new_game(&mut self, _mark: Mark) {}

    fn play_turn(&mut self, board: Board, mark: Mark, config: &Config) -> MoveResponse {
        // The score table costs a full search of its own, so only build it
        // when someone is listening.
        if tracing::enabled!(tracing::Level::DEBUG) {
            for (col, score) in score_moves(&board, mark, config, self.depth) {
                debug!(col, score);
            }
        }
        let col = select_move(&board, mark, config, self.depth, &mut self.rng)
            .expect("Asked to play a turn on a full board");
        MoveResponse(col)
    }
}
