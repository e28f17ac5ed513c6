//! Pure turn state machine for the 3×3 board. Nothing in here touches
//! Discord, which is what lets the integration tests drive full games.

use serenity::model::id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn emoji(self) -> &'static str {
        match self {
            Mark::X => "❌",
            Mark::O => "⭕",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl BoardStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BoardStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A move arrived from anyone other than the active player.
    NotYourTurn,
    /// The target cell already holds a mark.
    CellOccupied,
    /// The game reached a terminal state; nothing may change any more.
    GameOver,
}

/// The board plus the fixed player pair. Player 0 is ❌ and always moves
/// first; `turn` indexes into `players`.
#[derive(Debug, Clone)]
pub struct BoardState {
    pub board: [[Option<Mark>; 3]; 3],
    pub players: [UserId; 2],
    pub turn: usize,
    pub status: BoardStatus,
}

impl BoardState {
    pub fn new(player_x: UserId, player_o: UserId) -> Self {
        Self {
            board: [[None; 3]; 3],
            players: [player_x, player_o],
            turn: 0,
            status: BoardStatus::InProgress,
        }
    }

    pub fn current_player(&self) -> UserId {
        self.players[self.turn]
    }

    pub fn current_mark(&self) -> Mark {
        if self.turn == 0 { Mark::X } else { Mark::O }
    }

    pub fn is_participant(&self, user: UserId) -> bool {
        self.players.contains(&user)
    }

    /// Applies a move at (x, y) for `acting`. Exactly one cell flips from
    /// empty to a mark on success; on any error the board and turn are
    /// untouched.
    pub fn apply_move(&mut self, acting: UserId, x: usize, y: usize) -> Result<BoardStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if acting != self.current_player() {
            return Err(MoveError::NotYourTurn);
        }
        if self.board[y][x].is_some() {
            return Err(MoveError::CellOccupied);
        }

        self.board[y][x] = Some(self.current_mark());
        self.status = self.evaluate();
        if !self.status.is_terminal() {
            self.turn = 1 - self.turn;
        }
        Ok(self.status)
    }

    /// Checks the 3 rows, 3 columns, and both diagonals for a completed line,
    /// then falls back to a full-board draw check.
    fn evaluate(&self) -> BoardStatus {
        let b = &self.board;
        for row in b {
            if let Some(mark) = row[0] {
                if row[1] == Some(mark) && row[2] == Some(mark) {
                    return BoardStatus::Won(mark);
                }
            }
        }
        for col in 0..3 {
            if let Some(mark) = b[0][col] {
                if b[1][col] == Some(mark) && b[2][col] == Some(mark) {
                    return BoardStatus::Won(mark);
                }
            }
        }
        if let Some(mark) = b[1][1] {
            if (b[0][0] == Some(mark) && b[2][2] == Some(mark))
                || (b[0][2] == Some(mark) && b[2][0] == Some(mark))
            {
                return BoardStatus::Won(mark);
            }
        }
        if b.iter().all(|row| row.iter().all(|cell| cell.is_some())) {
            return BoardStatus::Draw;
        }
        BoardStatus::InProgress
    }
}
