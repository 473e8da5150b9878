use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reversi::config::{AppConfig, TopologyKind};
use reversi::game::{BoardTopology, Hex, Player, Square};
use reversi::session::play_match;
use reversi::strategy::{HumanStrategy, InputProvider, LineInput, MoveStrategy, StrategyKind};

/// Play Reversi between two strategies on a hex or square board.
#[derive(Parser)]
#[command(name = "reversi", about = "Play Reversi on hex or square boards")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Board shape
    #[arg(long, value_enum)]
    topology: Option<TopologyKind>,

    /// Override grid size (odd for hex, even for square)
    #[arg(long)]
    size: Option<usize>,

    /// Strategy for Black
    #[arg(long, value_enum)]
    black: Option<StrategyKind>,

    /// Strategy for White
    #[arg(long, value_enum)]
    white: Option<StrategyKind>,

    /// Override number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Override the per-game turn limit
    #[arg(long)]
    max_turns: Option<usize>,

    /// Seed for random strategies
    #[arg(long)]
    seed: Option<u64>,

    /// Print match results as JSON
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(topology) = cli.topology {
        if topology != config.game.topology {
            config.game.grid_size = None;
        }
        config.game.topology = topology;
    }
    if let Some(size) = cli.size {
        config.game.grid_size = Some(size);
    }
    if let Some(black) = cli.black {
        config.players.black = black;
    }
    if let Some(white) = cli.white {
        config.players.white = white;
    }
    if let Some(games) = cli.games {
        config.session.games = games;
    }
    if let Some(max_turns) = cli.max_turns {
        config.session.max_turns = max_turns;
    }
    if cli.seed.is_some() {
        config.session.seed = cli.seed;
    }
    config.validate().context("invalid settings")?;

    let size = config.game.grid_size();
    match config.game.topology {
        TopologyKind::Hex => run(Hex::new(size)?, &config, cli.json),
        TopologyKind::Square => run(Square::new(size)?, &config, cli.json),
    }
}

fn run<T: BoardTopology + 'static>(topology: T, config: &AppConfig, json: bool) -> Result<()> {
    let console = Rc::new(RefCell::new(LineInput::new(
        topology.clone(),
        io::stdin().lock(),
        io::stderr(),
    )));
    let seed = config.session.seed;
    // White draws from a stream offset from Black's
    let mut black = build_strategy(config.players.black, Player::Black, seed, &console);
    let mut white = build_strategy(
        config.players.white,
        Player::White,
        seed.map(|s| s.wrapping_add(1)),
        &console,
    );

    let stats = play_match(
        topology,
        black.as_mut(),
        white.as_mut(),
        config.session.games,
        config.session.max_turns,
    )
    .context("match aborted")?;

    if json {
        println!("{}", stats.to_json().context("serializing match results")?);
    } else {
        println!("{stats}");
    }
    Ok(())
}

fn build_strategy<T, P>(
    kind: StrategyKind,
    side: Player,
    seed: Option<u64>,
    console: &Rc<RefCell<P>>,
) -> Box<dyn MoveStrategy<T>>
where
    T: BoardTopology + 'static,
    P: InputProvider<T> + 'static,
{
    match kind.computer::<T>(seed) {
        Some(strategy) => strategy,
        None => Box::new(HumanStrategy::new(
            format!("Human ({})", side.name()),
            Rc::clone(console),
        )),
    }
}
