use crate::core::{Board, Mark, Move};
use crate::player::Strategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Uniform sampling over coordinates, retried until a legal cell turns up.
pub struct RandomStrategy {
    rng: RefCell<StdRng>,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&self, board: &Board, mark: Mark) -> Option<Move> {
        let size = board.size();
        // sampling below never terminates unless some in-range cell is legal
        let any_legal = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .any(|(row, col)| board.is_legal(&Move::new(row, col, mark)).is_ok());
        if !any_legal {
            return None;
        }

        let mut rng = self.rng.borrow_mut();
        loop {
            let mv = Move::new(rng.gen_range(0..size), rng.gen_range(0..size), mark);
            if board.is_legal(&mv).is_ok() {
                return Some(mv);
            }
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_returns_only_remaining_cell() {
        let board = Board::from_rows(&[
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::Blank, Mark::O],
            [Mark::O, Mark::X, Mark::O],
        ])
        .unwrap();
        let strategy = RandomStrategy::seeded(7);
        for _ in 0..20 {
            assert_eq!(
                strategy.choose_move(&board, Mark::X),
                Some(Move::new(1, 1, Mark::X))
            );
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let board = Board::default();
        let a = RandomStrategy::seeded(42);
        let b = RandomStrategy::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board, Mark::O),
                b.choose_move(&board, Mark::O)
            );
        }
    }

    #[test]
    fn test_random_on_full_board() {
        let board = Board::from_rows(&[
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::X],
        ])
        .unwrap();
        assert_eq!(RandomStrategy::seeded(3).choose_move(&board, Mark::O), None);
        assert_eq!(
            RandomStrategy::seeded(3).choose_move(&Board::default(), Mark::Blank),
            None
        );
    }

    #[test]
    fn test_random_on_nil_board() {
        assert_eq!(RandomStrategy::seeded(0).choose_move(&Board::nil(), Mark::X), None);
    }
}
