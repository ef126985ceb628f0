use crate::config::SimConfig;
use crate::core::{Mark, STANDARD_SIZE};
use crate::game::Game;
use crate::player::{Player, StrategyKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Offset between the two players' per-game seeds.
const SECOND_SEED_OFFSET: u64 = 0x9E37_79B9;

#[derive(Debug, Clone, Copy)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub first: StrategyKind,
    pub second: StrategyKind,
    pub board_size: usize,
    pub parallel: bool,
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            first: StrategyKind::Smart,
            second: StrategyKind::Random,
            board_size: STANDARD_SIZE,
            parallel: false,
            seed: None,
        }
    }
}

impl From<&SimConfig> for SelfPlayConfig {
    fn from(config: &SimConfig) -> Self {
        Self {
            num_games: config.num_games,
            first: config.first,
            second: config.second,
            board_size: config.board_size,
            parallel: config.parallel,
            seed: config.seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Option<Mark>,
    pub forfeit: bool,
    pub moves: usize,
}

/// Aggregate results. The first player always holds X, the second O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    /// Games decided by forfeit; also counted in the wins above.
    pub forfeits: usize,
    pub avg_moves: f64,
    pub first_strategy: String,
    pub second_strategy: String,
    pub board_size: usize,
    #[serde(default)]
    total_moves: usize,
}

impl SelfPlayStats {
    pub fn new(config: &SelfPlayConfig) -> Self {
        Self {
            total_games: 0,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            forfeits: 0,
            avg_moves: 0.0,
            first_strategy: config.first.to_string(),
            second_strategy: config.second.to_string(),
            board_size: config.board_size,
            total_moves: 0,
        }
    }

    pub fn add_result(&mut self, result: GameRecord) {
        self.total_games += 1;
        match result.winner {
            Some(Mark::X) => self.first_wins += 1,
            Some(_) => self.second_wins += 1,
            None => self.draws += 1,
        }
        if result.forfeit {
            self.forfeits += 1;
        }
        self.total_moves += result.moves;
        self.recalculate_averages();
    }

    /// Folds another batch of the same matchup into this one.
    pub fn merge(&mut self, other: &SelfPlayStats) {
        self.total_games += other.total_games;
        self.first_wins += other.first_wins;
        self.second_wins += other.second_wins;
        self.draws += other.draws;
        self.forfeits += other.forfeits;
        self.total_moves += other.total_moves;
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.total_games == 0 {
            return;
        }
        self.avg_moves = self.total_moves as f64 / self.total_games as f64;
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64
        }
    }

    pub fn first_win_rate(&self) -> f64 {
        self.rate(self.first_wins)
    }

    pub fn second_win_rate(&self) -> f64 {
        self.rate(self.second_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }
}

/// Builds the X and O players for game `index`. X is seeded with
/// `seed + index` and O with a fixed offset from that when a seed is configured.
pub fn build_players(config: &SelfPlayConfig, index: usize) -> anyhow::Result<(Player, Player)> {
    let seed = config.seed.map(|s| s.wrapping_add(index as u64));
    let first = Player::new(Mark::X, config.first.build(seed))?;
    let second = Player::new(
        Mark::O,
        config
            .second
            .build(seed.map(|s| s.wrapping_add(SECOND_SEED_OFFSET))),
    )?;
    Ok((first, second))
}

/// Plays one game with freshly built players.
pub fn play_game(config: &SelfPlayConfig, index: usize) -> anyhow::Result<GameRecord> {
    let (first, second) = build_players(config, index)?;

    let mut game = Game::with_board_size(first, second, config.board_size)?;
    let outcome = game.play()?;
    debug!(index, ?outcome, "self-play game finished");

    Ok(GameRecord {
        winner: outcome.winner(),
        forfeit: outcome.is_forfeit(),
        moves: game.history().len(),
    })
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let start_time = Instant::now();

    // every game owns its board and players, so games never share state
    let records: Vec<GameRecord> = if config.parallel {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_game(config, i))
            .collect::<anyhow::Result<Vec<_>>>()?
    } else {
        (0..config.num_games)
            .map(|i| play_game(config, i))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let mut stats = SelfPlayStats::new(config);
    for record in records {
        stats.add_result(record);
    }

    info!(
        games = stats.total_games,
        first_wins = stats.first_wins,
        second_wins = stats.second_wins,
        draws = stats.draws,
        forfeits = stats.forfeits,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "self-play finished"
    );
    Ok(stats)
}

/// Writes `stats` as `dir/stats_<timestamp>.json` and returns the path.
pub fn save_stats(stats: &SelfPlayStats, dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let filename = dir.join(format!(
        "stats_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S%.3f")
    ));

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    info!(path = %filename.display(), "stats saved");
    Ok(filename)
}
