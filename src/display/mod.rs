use crate::core::{Board, Mark, Move};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::fmt;
use std::io::{stdout, Write};

#[derive(Default)]
pub struct DisplayState {
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Grid drawing shared by `Display` and the terminal renderer.
fn border(size: usize, glyph: char) -> String {
    std::iter::repeat(glyph).take(4 * size + 1).collect()
}

fn separator(size: usize) -> String {
    format!("+{}", "———+".repeat(size))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.size();
        writeln!(f, "{}", border(size, '_'))?;
        for (i, row) in self.rows().enumerate() {
            if i != 0 {
                writeln!(f, "{}", separator(size))?;
            }
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", border(size, '‾'))
    }
}

/// Clears the terminal and draws `board`, highlighting the last move.
pub fn render_board(board: &Board, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    writeln!(out, "=== Tic-Tac-Toe ===")?;
    match &state.status_msg {
        Some(msg) => writeln!(out, "{}", msg.clone().bold().yellow())?,
        None => writeln!(out)?,
    }
    writeln!(out)?;

    let size = board.size();
    writeln!(out, "{}", border(size, '_'))?;
    for (row_idx, row) in board.rows().enumerate() {
        if row_idx != 0 {
            writeln!(out, "{}", separator(size))?;
        }
        write!(out, "|")?;
        for (col_idx, &cell) in row.iter().enumerate() {
            let is_last = state
                .last_move
                .map(|mv| mv.row == row_idx && mv.col == col_idx)
                .unwrap_or(false);
            let text = cell.symbol();
            if is_last {
                write!(out, " {} |", text.red().bold())?;
            } else {
                match cell {
                    Mark::X => write!(out, " {} |", text.cyan())?,
                    Mark::O => write!(out, " {} |", text.magenta())?,
                    Mark::Blank => write!(out, " {} |", text)?,
                }
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", border(size, '‾'))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Blank as B, O, X};

    #[test]
    fn test_board_text() {
        let board = Board::from_rows(&[[X, O, B], [B, X, B], [O, B, X]]).unwrap();
        let expected = "\
_____________
| X | O |   |
+———+———+———+
|   | X |   |
+———+———+———+
| O |   | X |
‾‾‾‾‾‾‾‾‾‾‾‾‾";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_board_text_scales() {
        let text = Board::new(4).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        // top, 4 rows, 3 separators, bottom
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].chars().count(), 17);
        assert_eq!(lines[1], "|   |   |   |   |");
    }
}
