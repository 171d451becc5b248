use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use snapshot_chess::chess_errors::GameError;
use snapshot_chess::engines::engine_console::ConsolePlayer;
use snapshot_chess::engines::engine_random::RandomPlayer;
use snapshot_chess::engines::engine_trait::Player;
use snapshot_chess::utils::engine_match_harness::{play_game, GameConfig, GameRecord};
use snapshot_chess::utils::render_game_state::{DelayRenderer, StreamRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    /// Uniformly random legal moves
    Random,
    /// Long algebraic moves typed on stdin
    Console,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a game of chess between two players", long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    white: PlayerKind,

    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    black: PlayerKind,

    /// Seed for random players (Black uses seed + 1)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before drawing each position
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Stop the game after this many plies
    #[arg(long)]
    max_plies: Option<u16>,

    /// Do not draw the board
    #[arg(long)]
    no_render: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level))
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&args) {
        Ok(record) => {
            println!("{}", record.outcome);
            let elapsed = record.finished_at - record.started_at;
            println!("{} plies in {} ms", record.moves.len(), elapsed.num_milliseconds());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<GameRecord, GameError> {
    let mut white = build_player(args.white, args.seed);
    let mut black = build_player(args.black, args.seed.map(|seed| seed.wrapping_add(1)));

    let mut config = GameConfig {
        render: !args.no_render,
        ..GameConfig::default()
    };
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }

    let mut renderer = DelayRenderer::new(StreamRenderer::new(io::stdout()), Duration::from_millis(args.delay_ms));
    play_game(white.as_mut(), black.as_mut(), &mut renderer, &config)
}

fn build_player(kind: PlayerKind, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::seeded(seed)),
            None => Box::new(RandomPlayer::new()),
        },
        PlayerKind::Console => Box::new(ConsolePlayer::new(BufReader::new(io::stdin()), io::stdout())),
    }
}
