use crate::core::{Board, Mark, Move};

/// Move selection for one side of a game.
///
/// Implementations must not mutate `board`; any what-if evaluation happens on
/// clones. `None` is returned only when `board` has no legal move for `mark`.
pub trait Strategy {
    fn choose_move(&self, board: &Board, mark: Mark) -> Option<Move>;
    fn name(&self) -> &str;
}

/// Weighted line sums of `board` from `mark`'s point of view: higher is
/// always better for `mark`.
pub fn weighted_line_sums(board: &Board, mark: Mark) -> Vec<i32> {
    let sign = mark.value();
    board.line_sums().into_iter().map(|s| s * sign).collect()
}
