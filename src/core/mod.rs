pub mod board;
pub mod r#move;
pub mod types;

pub use board::{Board, MAX_BOARD_SIZE, STANDARD_SIZE};
pub use r#move::Move;
pub use types::{Mark, Outcome};
