use super::r#move::Move;
use super::types::{Mark, Outcome};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 9;
/// Canonical tic-tac-toe edge.
pub const STANDARD_SIZE: usize = 3;

/// Square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

/// Unchecked wire form of a board.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Mark>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size == 0 && raw.cells.is_empty() {
            return Ok(Board::nil());
        }
        if raw.size == 0 || raw.size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(raw.size));
        }
        if raw.cells.len() != raw.size * raw.size {
            return Err(BoardError::NotSquare);
        }
        let rows: Vec<&[Mark]> = raw.cells.chunks(raw.size).collect();
        Board::from_rows(&rows)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            size: STANDARD_SIZE,
            cells: vec![Mark::Blank; STANDARD_SIZE * STANDARD_SIZE],
        }
    }
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board {
            size,
            cells: vec![Mark::Blank; size * size],
        })
    }

    /// A board with no cells. Every `play` on it fails with `NilBoard`.
    pub fn nil() -> Self {
        Board {
            size: 0,
            cells: Vec::new(),
        }
    }

    /// Builds a board from explicit rows (top to bottom).
    pub fn from_rows<R: AsRef<[Mark]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::NotSquare);
            }
            cells.extend_from_slice(row);
        }
        Ok(Board { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| m.is_playable())
    }

    /// Center cell, defined only for odd sizes.
    pub fn center(&self) -> Option<(usize, usize)> {
        if self.size % 2 == 1 {
            Some((self.size / 2, self.size / 2))
        } else {
            None
        }
    }

    pub fn is_legal(&self, mv: &Move) -> Result<(), BoardError> {
        if !mv.mark.is_playable() {
            return Err(BoardError::InvalidMark);
        }
        if mv.row >= self.size || mv.col >= self.size {
            return Err(BoardError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        match self.cells.get(mv.row * self.size + mv.col) {
            Some(Mark::Blank) => Ok(()),
            Some(_) => Err(BoardError::CellOccupied {
                row: mv.row,
                col: mv.col,
            }),
            None => Err(BoardError::NilBoard),
        }
    }

    /// Validates and writes the move in place. The board is untouched on error.
    pub fn play(&mut self, mv: &Move) -> Result<(), BoardError> {
        if self.cells.is_empty() {
            return Err(BoardError::NilBoard);
        }
        self.is_legal(mv)?;
        self.cells[mv.row * self.size + mv.col] = mv.mark;
        Ok(())
    }

    /// Signed sums of every line: rows, then columns, then the main
    /// diagonal and the anti-diagonal.
    pub fn line_sums(&self) -> Vec<i32> {
        let n = self.size;
        if n == 0 || self.cells.len() != n * n {
            return Vec::new();
        }
        let mut sums = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            sums.push((0..n).map(|col| self.cells[row * n + col].value()).sum());
        }
        for col in 0..n {
            sums.push((0..n).map(|row| self.cells[row * n + col].value()).sum());
        }
        sums.push((0..n).map(|i| self.cells[i * n + i].value()).sum());
        sums.push((0..n).map(|i| self.cells[i * n + (n - 1 - i)].value()).sum());

        sums
    }

    pub fn check_winner(&self) -> Outcome {
        if let Some(mark) = self
            .line_sums()
            .into_iter()
            .find_map(|sum| Mark::from_line_sum(sum, self.size))
        {
            return Outcome::Win(mark);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Every blank cell paired with `mark`, in row-major order.
    pub fn legal_moves(&self, mark: Mark) -> Vec<Move> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Blank)
            .map(|(i, _)| Move::new(i / self.size, i % self.size, mark))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        // chunks panics on zero, and a nil board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Blank as B, O, X};

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.legal_moves(X).len(), 9);
        assert_eq!(board.check_winner(), Outcome::InProgress);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
        assert_eq!(Board::new(10), Err(BoardError::InvalidSize(10)));
        assert_eq!(
            Board::from_rows(&[vec![X, O], vec![B]]),
            Err(BoardError::NotSquare)
        );
    }

    #[test]
    fn test_every_legal_move_then_occupied() {
        let empty = Board::default();
        for mv in empty.legal_moves(X) {
            let mut board = empty.clone();
            assert!(board.play(&mv).is_ok());
            assert_eq!(
                board.is_legal(&mv),
                Err(BoardError::CellOccupied {
                    row: mv.row,
                    col: mv.col
                })
            );
        }
    }

    #[test]
    fn test_is_legal_error_order() {
        let mut board = Board::default();
        board.play(&Move::new(1, 1, X)).unwrap();

        // mark is checked before bounds and occupancy
        assert_eq!(
            board.is_legal(&Move::new(7, 7, Mark::Blank)),
            Err(BoardError::InvalidMark)
        );
        assert_eq!(
            board.is_legal(&Move::new(3, 0, O)),
            Err(BoardError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert_eq!(
            board.is_legal(&Move::new(1, 1, O)),
            Err(BoardError::CellOccupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_rejected_play_leaves_board_unchanged() {
        let mut board = Board::default();
        let mv = Move::new(0, 0, X);
        board.play(&mv).unwrap();
        let snapshot = board.clone();

        assert!(board.play(&mv).is_err());
        assert!(board.play(&Move::new(0, 0, O)).is_err());
        assert!(board.play(&Move::new(0, 5, O)).is_err());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_nil_board() {
        let mut board = Board::nil();
        assert_eq!(board.play(&Move::new(0, 0, X)), Err(BoardError::NilBoard));
        assert_eq!(board.rows().count(), 0);
        assert!(board.line_sums().is_empty());
        assert!(board.legal_moves(X).is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::default();
        let mut copy = original.clone();
        copy.play(&Move::new(2, 2, O)).unwrap();
        assert_eq!(original.get(2, 2), Some(B));
        assert_eq!(copy.get(2, 2), Some(O));
    }

    #[test]
    fn test_every_line_wins() {
        let lines: Vec<[(usize, usize); 3]> = vec![
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];
        for mark in [X, O] {
            for line in &lines {
                let mut board = Board::default();
                for (i, &(row, col)) in line.iter().enumerate() {
                    assert_eq!(board.check_winner(), Outcome::InProgress);
                    board.play(&Move::new(row, col, mark)).unwrap();
                    if i == 2 {
                        assert_eq!(board.check_winner(), Outcome::Win(mark));
                    }
                }
            }
        }
    }

    #[test]
    fn test_draw() {
        let board = Board::from_rows(&[[X, O, X], [X, O, O], [O, X, X]]).unwrap();
        assert_eq!(board.check_winner(), Outcome::Draw);
    }

    #[test]
    fn test_line_sums_order() {
        let board = Board::from_rows(&[[X, X, B], [O, O, B], [B, B, B]]).unwrap();
        assert_eq!(board.line_sums(), vec![2, -2, 0, 0, 0, 0, 0, -1]);

        let board = Board::from_rows(&[[X, B, O], [B, X, B], [O, B, B]]).unwrap();
        assert_eq!(board.line_sums(), vec![0, 1, -1, 0, 1, -1, 2, -1]);
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::from_rows(&[[X, B, B], [B, O, B], [B, B, X]]).unwrap();
        let coords: Vec<(usize, usize)> = board
            .legal_moves(O)
            .iter()
            .map(|m| (m.row, m.col))
            .collect();
        assert_eq!(coords, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
        assert!(board.legal_moves(O).iter().all(|m| m.mark == O));
    }

    #[test]
    fn test_center() {
        assert_eq!(Board::default().center(), Some((1, 1)));
        assert_eq!(Board::new(4).unwrap().center(), None);
        assert_eq!(Board::new(5).unwrap().center(), Some((2, 2)));
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let board: Board = serde_json::from_str(r#"{"size":2,"cells":["X","Blank","Blank","O"]}"#).unwrap();
        assert_eq!(board.get(1, 1), Some(O));
        assert_eq!(board.legal_moves(X).len(), 2);

        let nil: Board = serde_json::from_str(r#"{"size":0,"cells":[]}"#).unwrap();
        assert_eq!(nil, Board::nil());

        assert!(serde_json::from_str::<Board>(r#"{"size":1,"cells":["X","Blank"]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"size":0,"cells":["Blank"]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"size":10,"cells":[]}"#).is_err());
    }

    #[test]
    fn test_serialized_board_loads_back() {
        let board = Board::from_rows(&[[X, B, O], [B, X, B], [O, B, B]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_larger_board_win() {
        let mut board = Board::new(4).unwrap();
        for row in 0..4 {
            board.play(&Move::new(row, 3 - row, O)).unwrap();
        }
        assert_eq!(board.check_winner(), Outcome::Win(O));
    }
}
