use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_sim::config::{SimConfig, DEFAULT_CONFIG_PATH};
use tictactoe_sim::display::{render_board, DisplayState};
use tictactoe_sim::game::{Game, GameOutcome};
use tictactoe_sim::player::StrategyKind;
use tictactoe_sim::selfplay::{build_players, run_selfplay, save_stats, SelfPlayConfig};
use tracing_subscriber::EnvFilter;

/// Pit two tic-tac-toe strategies against each other.
#[derive(Parser, Debug)]
#[command(name = "tictactoe-sim", version)]
struct Args {
    /// JSON config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Strategy for the first mover (X)
    #[arg(long, value_enum)]
    first: Option<StrategyKind>,

    /// Strategy for the second mover (O)
    #[arg(long, value_enum)]
    second: Option<StrategyKind>,

    /// Board edge length
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,

    /// Play games across all cores
    #[arg(long)]
    parallel: bool,

    /// Play a single game and draw every move
    #[arg(long)]
    watch: bool,

    /// Directory for the JSON stats report
    #[arg(long)]
    save: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(first) = self.first {
            config.first = first;
        }
        if let Some(second) = self.second {
            config.second = second;
        }
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.parallel {
            config.parallel = true;
        }
        if let Some(dir) = &self.save {
            config.output_dir = Some(dir.display().to_string());
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = SimConfig::load_or_default(&args.config);
    args.apply(&mut config);

    if args.watch {
        return watch_game(&config);
    }

    let stats = run_selfplay(&SelfPlayConfig::from(&config))?;

    println!("=== Self-Play Results ===");
    println!(
        "{} (X) vs {} (O), {} games on {}x{}",
        stats.first_strategy,
        stats.second_strategy,
        stats.total_games,
        stats.board_size,
        stats.board_size
    );
    println!(
        "X wins: {} ({:.1}%)",
        stats.first_wins,
        stats.first_win_rate() * 100.0
    );
    println!(
        "O wins: {} ({:.1}%)",
        stats.second_wins,
        stats.second_win_rate() * 100.0
    );
    println!(
        "Draws: {} ({:.1}%)",
        stats.draws,
        stats.draw_rate() * 100.0
    );
    if stats.forfeits > 0 {
        println!("Forfeits: {}", stats.forfeits);
    }
    println!("Avg Moves: {:.1}", stats.avg_moves);

    if let Some(dir) = &config.output_dir {
        let path = save_stats(&stats, dir)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn watch_game(config: &SimConfig) -> anyhow::Result<()> {
    let (first, second) = build_players(&SelfPlayConfig::from(config), 0)?;
    let names = format!("{} (X) vs {} (O)", first.name(), second.name());

    let mut game = Game::with_board_size(first, second, config.board_size)?;

    let mut state = DisplayState::new();
    state.status_msg = Some(names.clone());
    render_board(game.board(), &state)?;

    let mut render_result = Ok(());
    let outcome = game.play_with(|board, mv| {
        std::thread::sleep(Duration::from_millis(600));
        state.last_move = Some(*mv);
        state.status_msg = Some(format!("{}: {}", names, mv));
        if render_result.is_ok() {
            render_result = render_board(board, &state);
        }
    })?;
    render_result?;

    let summary = match outcome {
        GameOutcome::Win(mark) => format!("{:?} wins!", mark),
        GameOutcome::Draw => "Cat's game!".to_string(),
        GameOutcome::Forfeit { winner, reason } => {
            format!("{:?} wins by forfeit ({:?})", winner, reason)
        }
    };
    state.status_msg = Some(summary);
    render_board(game.board(), &state)?;

    Ok(())
}
