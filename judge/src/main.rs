use clap::Parser;
use connectfour::Config;
use judge::{play_game, GameResult, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the first bot executable
    bot_1: String,

    /// Path to the second bot executable
    bot_2: String,

    /// Board height
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Board width
    #[arg(long, default_value_t = 7)]
    columns: usize,

    /// How many pieces in a row win the game
    #[arg(long, default_value_t = 4)]
    inarow: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config {
        rows: args.rows,
        columns: args.columns,
        inarow: args.inarow,
    };
    config.validate()?;

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut player_1 = Player::new(&bot_name(&args.bot_1), &args.bot_1)?;
    let mut player_2 = Player::new(&bot_name(&args.bot_2), &args.bot_2)?;
    let player_names = [player_1.name.clone(), player_2.name.clone()];

    match play_game(&mut rng, &mut player_1, &mut player_2, &config)? {
        GameResult::WonByPlayer { player_idx } => {
            info!(winner = player_names[player_idx]);
        }
        GameResult::Tie => {
            info!("Tie");
        }
        GameResult::IllegalMoveByPlayer { player_idx, err } => {
            warn!(
                player = player_names[player_idx],
                "Illegal move by player: {}", err
            );
        }
    }

    player_1.send_bye()?;
    player_2.send_bye()?;

    Ok(())
}

fn bot_name(executable_path: &str) -> String {
    std::path::Path::new(executable_path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(executable_path))
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
