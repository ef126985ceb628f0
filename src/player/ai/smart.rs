//! # Smart strategy
//!
//! One-ply heuristic that approximates a minimax reply. After each candidate
//! move the weighted line sums are reduced to two numbers:
//!
//! - `mine`: the best line for the mover (its offensive potential)
//! - `threat`: the worst line for the mover, i.e. the opponent's strongest line
//!
//! Candidates are scanned in row-major order with a two-stage update. The
//! first stage adopts any candidate whose `threat` is at least as good as the
//! best seen; the second stage additionally requires `mine` to be at least as
//! good and then raises both bounds. Both stages use `>=`, so later candidates
//! win ties. The center cell gets one more dominance check after the scan.

use crate::core::{Board, Mark, Move, Outcome};
use crate::player::strategy::{weighted_line_sums, Strategy};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineScore {
    mine: i32,
    threat: i32,
}

enum Evaluation {
    Win,
    Score(LineScore),
}

pub struct SmartStrategy;

impl SmartStrategy {
    pub fn new() -> Self {
        SmartStrategy
    }

    /// Plays `mv` on a clone and scores the result. `None` if `mv` is illegal.
    fn evaluate(board: &Board, mv: &Move, mark: Mark) -> Option<Evaluation> {
        let mut next_board = board.clone();
        next_board.play(mv).ok()?;

        if next_board.check_winner() == Outcome::Win(mark) {
            return Some(Evaluation::Win);
        }

        let sums = weighted_line_sums(&next_board, mark);
        let mine = sums.iter().copied().max()?;
        let threat = sums.iter().copied().min()?;

        // second win path, independent of check_winner
        if mine == board.size() as i32 {
            return Some(Evaluation::Win);
        }

        Some(Evaluation::Score(LineScore { mine, threat }))
    }
}

impl Default for SmartStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SmartStrategy {
    fn choose_move(&self, board: &Board, mark: Mark) -> Option<Move> {
        let mut best_move = None;
        let mut best_mine = i32::MIN;
        let mut best_threat = i32::MIN;

        for mv in board.legal_moves(mark) {
            let score = match Self::evaluate(board, &mv, mark) {
                Some(Evaluation::Win) => {
                    debug!(%mv, "smart: immediate win");
                    return Some(mv);
                }
                Some(Evaluation::Score(score)) => score,
                None => continue,
            };

            // defensive stage
            if score.threat >= best_threat {
                best_move = Some(mv);
                best_threat = score.threat;
            }
            // offensive refinement on top of it
            if score.mine >= best_mine && score.threat >= best_threat {
                best_move = Some(mv);
                best_mine = score.mine;
                best_threat = score.threat;
            }
        }

        if let Some((row, col)) = board.center() {
            let center = Move::new(row, col, mark);
            if let Some(Evaluation::Score(score)) = Self::evaluate(board, &center, mark) {
                if score.mine >= best_mine && score.threat >= best_threat {
                    debug!("smart: center preferred");
                    best_move = Some(center);
                }
            }
        }

        debug!(?best_move, best_mine, best_threat, "smart: chose move");
        best_move
    }

    fn name(&self) -> &str {
        "Smart"
    }
}
