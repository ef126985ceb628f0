pub mod ai;
pub mod strategy;

pub use ai::{InformedStrategy, RandomStrategy, SmartStrategy, StrategyKind};
pub use strategy::Strategy;

use crate::core::{Board, Mark, Move};
use crate::error::GameError;

/// A mark bound to the strategy that plays it.
pub struct Player {
    mark: Mark,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(mark: Mark, strategy: Box<dyn Strategy>) -> Result<Self, GameError> {
        if !mark.is_playable() {
            return Err(GameError::InvalidPlayerMark);
        }
        Ok(Player { mark, strategy })
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    pub fn choose(&self, board: &Board) -> Option<Move> {
        self.strategy.choose_move(board, self.mark)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("mark", &self.mark)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
