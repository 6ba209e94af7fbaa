//! Command-line board race.
//!
//! `race play` plays one game turn by turn and prints the log (and board).
//! `race simulate` plays many seeded games and prints win statistics.

use std::io::BufRead;
use std::path::PathBuf;

use board_race::games::classic::ClassicGameBuilder;
use board_race::render::{render_cards, render_summary, ConsoleObserver, DEFAULT_COLUMNS};
use board_race::{GameConfig, GameRng, PlayerId, PlayerMap, TurnEngine};
use clap::{Parser, Subcommand};

/// Linear board race with ladders, holes and cards
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON game configuration (defaults to the classic board).
    #[arg(long, short, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// RNG seed.
    #[arg(long, short, default_value_t = 42, global = true)]
    seed: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game.
    Play {
        /// Draw the board after every move.
        #[arg(long)]
        board: bool,

        /// Board columns when drawing.
        #[arg(long, default_value_t = DEFAULT_COLUMNS)]
        columns: usize,

        /// Wait for Enter before each roll.
        #[arg(long)]
        step: bool,

        /// Give up after this many turns.
        #[arg(long, default_value_t = 10_000)]
        max_turns: u32,
    },

    /// Play many games and report who wins.
    Simulate {
        /// Number of games.
        #[arg(long, short, default_value_t = 1_000)]
        games: u32,

        /// Give up on a game after this many turns.
        #[arg(long, default_value_t = 10_000)]
        max_turns: u32,
    },

    /// Print the configuration as JSON.
    Config,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => ClassicGameBuilder::new().config(),
    };

    let result = match cli.command {
        Command::Play { board, columns, step, max_turns } => {
            play(config, cli.seed, board, columns, step, max_turns)
        }
        Command::Simulate { games, max_turns } => simulate(config, cli.seed, games, max_turns),
        Command::Config => config
            .to_json_pretty()
            .map(|json| println!("{json}"))
            .map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn play(
    config: GameConfig,
    seed: u64,
    board: bool,
    columns: usize,
    step: bool,
    max_turns: u32,
) -> Result<(), board_race::EngineError> {
    println!("{}", render_summary(&config));
    println!("Cards:\n{}\n", render_cards(&config));

    let mut console = ConsoleObserver::new(std::io::stdout());
    if board {
        console = console.with_board(columns);
    }
    let mut engine = TurnEngine::with_observer(config, seed, console)?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !engine.is_over() && engine.state().turns_taken < max_turns {
        if step {
            let current = &engine.state().current_player().name;
            println!("{current} to roll (Enter)");
            if lines.next().is_none() {
                break;
            }
        }
        engine.request_turn()?;
    }

    match engine.winner() {
        Some(winner) => log::info!(
            "{} won after {} turns",
            engine.state().player(winner).name,
            engine.state().turns_taken
        ),
        None => log::info!("no winner after {} turns", engine.state().turns_taken),
    }
    Ok(())
}

fn simulate(config: GameConfig, seed: u64, games: u32, max_turns: u32) -> Result<(), board_race::EngineError> {
    config.validate()?;

    let mut master = GameRng::new(seed);
    let mut wins: PlayerMap<u32> = PlayerMap::with_value(config.player_count(), 0);
    let mut unfinished = 0u32;
    let mut total_turns = 0u64;

    log::info!("simulating {} games from seed {}", games, seed);

    for _ in 0..games {
        let game_seed = master.fork().seed();
        let mut engine = TurnEngine::new(config.clone(), game_seed)?;

        match engine.play_to_end(max_turns)? {
            Some(winner) => wins[winner] += 1,
            None => unfinished += 1,
        }
        log::debug!("seed {}: {:?} after {} turns", game_seed, engine.winner(), engine.state().turns_taken);
        total_turns += u64::from(engine.state().turns_taken);
    }

    for (id, player) in config.players.iter().enumerate() {
        let count = wins[PlayerId::new(id as u8)];
        let share = if games == 0 { 0.0 } else { f64::from(count) * 100.0 / f64::from(games) };
        println!("{:<12} {:>8} wins  {:>6.2}%", player.name, count, share);
    }
    if unfinished > 0 {
        println!("{:<12} {:>8}", "unfinished", unfinished);
    }
    if games > 0 {
        println!("average length: {:.1} turns", total_turns as f64 / f64::from(games));
    }
    Ok(())
}
