use crate::core::STANDARD_SIZE;
use crate::player::StrategyKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_config.json";

/// Simulation defaults. Any field missing from the file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub num_games: usize,
    pub board_size: usize,
    pub first: StrategyKind,
    pub second: StrategyKind,
    pub parallel: bool,
    pub seed: Option<u64>,
    pub output_dir: Option<String>,
}

impl SimConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "using default config");
            Self::default()
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            num_games: 10_000,
            board_size: STANDARD_SIZE,
            first: StrategyKind::Smart,
            second: StrategyKind::Random,
            parallel: false,
            seed: None,
            output_dir: None,
        }
    }
}
