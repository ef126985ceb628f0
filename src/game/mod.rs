use crate::core::{Board, Mark, Move, Outcome};
use crate::error::{BoardError, GameError};
use crate::player::Player;
use tracing::{debug, info, warn};

/// Why a game ended without a completed line or a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForfeitReason {
    /// The chosen move failed validation on the live board.
    Illegal(BoardError),
    /// The strategy produced no move.
    NoMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
    Forfeit { winner: Mark, reason: ForfeitReason },
}

impl GameOutcome {
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            GameOutcome::Forfeit { winner, .. } => Some(winner),
            GameOutcome::Draw => None,
        }
    }

    pub fn is_forfeit(self) -> bool {
        matches!(self, GameOutcome::Forfeit { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(Mark),
    Finished(GameOutcome),
}

/// One playthrough between two players on one board.
pub struct Game {
    first: Player,
    second: Player,
    board: Board,
    state: GameState,
    history: Vec<Move>,
}

impl Game {
    /// Standard 3x3 game; `first` moves first.
    pub fn new(first: Player, second: Player) -> Result<Self, GameError> {
        Self::with_board(first, second, Board::default())
    }

    pub fn with_board_size(first: Player, second: Player, size: usize) -> Result<Self, GameError> {
        Self::with_board(first, second, Board::new(size)?)
    }

    /// Starts from an existing position, with `first` to move.
    pub fn with_board(first: Player, second: Player, board: Board) -> Result<Self, GameError> {
        if first.mark() == second.mark() {
            return Err(GameError::DuplicateMark(first.mark()));
        }
        let decided = board.check_winner();
        if decided.is_terminal() {
            return Err(GameError::AlreadyDecided(decided));
        }
        let state = GameState::AwaitingMove(first.mark());
        Ok(Game {
            first,
            second,
            board,
            state,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::AwaitingMove(_) => None,
        }
    }

    fn player(&self, mark: Mark) -> &Player {
        if self.first.mark() == mark {
            &self.first
        } else {
            &self.second
        }
    }

    /// Plays a single half-turn.
    pub fn step(&mut self) -> Result<GameState, GameError> {
        self.step_with(&mut |_: &Board, _: &Move| {})
    }

    fn step_with<F>(&mut self, on_move: &mut F) -> Result<GameState, GameError>
    where
        F: FnMut(&Board, &Move),
    {
        let mark = match self.state {
            GameState::AwaitingMove(mark) => mark,
            GameState::Finished(_) => return Err(GameError::Finished),
        };
        let choice = self.player(mark).choose(&self.board);

        let finished = match choice {
            None => Some(GameOutcome::Forfeit {
                winner: mark.opponent(),
                reason: ForfeitReason::NoMove,
            }),
            Some(mv) => {
                let applied = if mv.mark.is_playable() && mv.mark != mark {
                    Err(BoardError::InvalidMark)
                } else {
                    self.board.play(&mv)
                };
                match applied {
                    Err(err) => {
                        warn!(%mv, %err, "illegal move, {:?} forfeits", mark);
                        Some(GameOutcome::Forfeit {
                            winner: mark.opponent(),
                            reason: ForfeitReason::Illegal(err),
                        })
                    }
                    Ok(()) => {
                        debug!(ply = self.history.len() + 1, %mv, "move applied");
                        self.history.push(mv);
                        on_move(&self.board, &mv);
                        match self.board.check_winner() {
                            Outcome::Win(winner) if winner == mark => {
                                Some(GameOutcome::Win(winner))
                            }
                            Outcome::Draw => Some(GameOutcome::Draw),
                            _ => None,
                        }
                    }
                }
            }
        };

        self.state = match finished {
            Some(outcome) => {
                info!(?outcome, plies = self.history.len(), "game over");
                GameState::Finished(outcome)
            }
            None => GameState::AwaitingMove(mark.opponent()),
        };
        Ok(self.state)
    }

    /// Runs the game to completion.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.play_with(|_, _| {})
    }

    /// Runs the game to completion, calling `on_move` after every applied move.
    pub fn play_with<F>(&mut self, mut on_move: F) -> Result<GameOutcome, GameError>
    where
        F: FnMut(&Board, &Move),
    {
        loop {
            if let GameState::Finished(outcome) = self.step_with(&mut on_move)? {
                return Ok(outcome);
            }
        }
    }
}
