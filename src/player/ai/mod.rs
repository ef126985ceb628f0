pub mod informed;
pub mod random;
pub mod smart;

pub use informed::InformedStrategy;
pub use random::RandomStrategy;
pub use smart::SmartStrategy;

use crate::player::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialisable selector for the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Informed,
    Smart,
}

impl StrategyKind {
    /// Builds a fresh strategy. `seed` only affects `Random`.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::seeded(seed)),
                None => Box::new(RandomStrategy::new()),
            },
            StrategyKind::Informed => Box::new(InformedStrategy::new()),
            StrategyKind::Smart => Box::new(SmartStrategy::new()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StrategyKind::Random => "Random",
            StrategyKind::Informed => "Informed",
            StrategyKind::Smart => "Smart",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_names() {
        for kind in [
            StrategyKind::Random,
            StrategyKind::Informed,
            StrategyKind::Smart,
        ] {
            assert_eq!(kind.build(Some(3)).name(), kind.to_string());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&StrategyKind::Smart).unwrap(),
            "\"smart\""
        );
        let kind: StrategyKind = serde_json::from_str("\"informed\"").unwrap();
        assert_eq!(kind, StrategyKind::Informed);
    }
}
