use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of a single cell.
///
/// The discriminants are the signed values used for line sums: a complete
/// line of `X` sums to `+size`, a complete line of `O` to `-size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    X = 1,
    O = -1,
    #[default]
    Blank = 0,
}

impl Mark {
    /// Signed unit value (+1, -1, 0).
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn is_playable(self) -> bool {
        self != Mark::Blank
    }

    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Blank => Mark::Blank,
        }
    }

    /// Mark whose complete line sums to `sum` on a board of `size`.
    pub fn from_line_sum(sum: i32, size: usize) -> Option<Mark> {
        let full = size as i32;
        if sum == full {
            Some(Mark::X)
        } else if sum == -full {
            Some(Mark::O)
        } else {
            None
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Blank => " ",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Board-level result of a win check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}
