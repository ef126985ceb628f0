use crate::core::{Board, Mark, Move, Outcome};
use crate::player::strategy::{weighted_line_sums, Strategy};
use tracing::debug;

/// Single-ply greedy search.
///
/// Takes the first immediately winning move; otherwise the move whose
/// resulting board has the highest total weighted line sum. Ties keep the
/// earliest candidate in row-major order.
pub struct InformedStrategy;

impl InformedStrategy {
    pub fn new() -> Self {
        InformedStrategy
    }

    fn score(board: &Board, mark: Mark) -> i32 {
        weighted_line_sums(board, mark).iter().sum()
    }
}

impl Default for InformedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for InformedStrategy {
    fn choose_move(&self, board: &Board, mark: Mark) -> Option<Move> {
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mv in board.legal_moves(mark) {
            let mut next_board = board.clone();
            if next_board.play(&mv).is_err() {
                continue;
            }

            if next_board.check_winner() == Outcome::Win(mark) {
                debug!(%mv, "informed: immediate win");
                return Some(mv);
            }

            let score = Self::score(&next_board, mark);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        debug!(?best_move, best_score, "informed: chose move");
        best_move
    }

    fn name(&self) -> &str {
        "Informed"
    }
}
