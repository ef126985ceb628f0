use super::types::Mark;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
}

impl Move {
    pub fn new(row: usize, col: usize, mark: Mark) -> Self {
        Move { row, col, mark }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at ({}, {})", self.mark, self.row, self.col)
    }
}
