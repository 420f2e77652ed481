use anyhow::Result;
use clap::{Parser, ValueEnum};
use knight_iso::play::{play_game, random_opening};
use knight_iso::search::Heuristic;
use knight_iso::settings::{AgentSettings, MatchSettings};
use knight_iso::Board;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Minimax,
    AlphaBeta,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "knight-iso", about = "Play one game of knight's-move Isolation between two agents", long_about = None)]
struct Args {
    /// JSON match settings; overrides every other option when given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Agent for player 1
    #[arg(long, value_enum, default_value = "alpha-beta")]
    p1: AgentKind,

    /// Agent for player 2
    #[arg(long, value_enum, default_value = "minimax")]
    p2: AgentKind,

    /// Fixed depth for minimax agents; depth cap for alpha-beta agents when given
    #[arg(long)]
    depth: Option<u32>,

    /// Evaluation function for search agents
    #[arg(long, value_enum, default_value = "freedom-diff")]
    heuristic: Heuristic,

    /// Abort search when fewer than this many milliseconds remain
    #[arg(long, default_value_t = 10.0)]
    margin_ms: f64,

    /// Board width
    #[arg(long, default_value_t = 7)]
    width: usize,

    /// Board height
    #[arg(long, default_value_t = 7)]
    height: usize,

    /// Time budget per move in milliseconds
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,

    /// Place both players on random cells before the agents take over
    #[arg(long)]
    random_openings: bool,

    /// Random seed (openings and random agents)
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Optional: write the game record as JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn agent_settings(kind: AgentKind, args: &Args, seed: u64) -> AgentSettings {
    match kind {
        AgentKind::Minimax => AgentSettings::Minimax {
            depth: args.depth.unwrap_or(knight_iso::search::config::DEFAULT_DEPTH),
            heuristic: args.heuristic,
            margin_ms: args.margin_ms,
        },
        AgentKind::AlphaBeta => AgentSettings::AlphaBeta {
            max_depth: args.depth,
            heuristic: args.heuristic,
            margin_ms: args.margin_ms,
        },
        AgentKind::Random => AgentSettings::Random { seed },
    }
}

fn settings_from_args(args: &Args) -> MatchSettings {
    MatchSettings {
        width: args.width,
        height: args.height,
        time_limit_ms: args.time_limit_ms,
        random_openings: args.random_openings,
        seed: args.seed,
        player_one: agent_settings(args.p1, args, args.seed.wrapping_add(1)),
        player_two: agent_settings(args.p2, args, args.seed.wrapping_add(2)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => MatchSettings::load(path)?,
        None => settings_from_args(&args),
    };
    log::info!("match settings: {:?}", settings);

    let mut board = Board::new(settings.width, settings.height)?;
    if settings.random_openings {
        let mut rng = SmallRng::seed_from_u64(settings.seed);
        board = random_opening(board, &mut rng);
    }
    let mut one = settings.player_one.build()?;
    let mut two = settings.player_two.build()?;
    println!("Player 1: {}", one.name());
    println!("Player 2: {}", two.name());
    println!("\n{}", board);

    let t0 = Instant::now();
    let record = play_game(board.clone(), one.as_mut(), two.as_mut(), Duration::from_millis(settings.time_limit_ms));
    let elapsed = t0.elapsed();

    let mut end = board;
    for &mv in &record.moves { end.apply_move(mv)?; }
    println!("{}", end);
    let moves: Vec<String> = record.moves.iter().map(|m| m.to_string()).collect();
    println!("Moves: {}", moves.join(" "));
    println!("Winner: {} ({:?}) after {} moves in {:.2}s", record.winner, record.outcome, record.moves.len(), elapsed.as_secs_f32());

    if let Some(path) = &args.json_out {
        let f = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(f), &record)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
