use std::cmp::Ordering;

use super::{Board, Cell, Player, COLS};
use crate::error::MoveError;

/// Result type of every session operation.
///
/// `Invalid` is a sentinel only: it signals an out-of-bounds coordinate (for
/// [`GameSession::piece_at`] and [`GameSession::drop_piece`]) or a game that
/// is not over yet (for [`GameSession::game_state`]). It is never stored on
/// the board; cell storage uses [`Cell`], which has no such variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Piece {
    Empty,
    X,
    O,
    Invalid,
}

impl From<Cell> for Piece {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Piece::Empty,
            Cell::X => Piece::X,
            Cell::O => Piece::O,
        }
    }
}

impl From<Player> for Piece {
    fn from(player: Player) -> Self {
        player.to_cell().into()
    }
}

/// One game of Piezas: a board plus whose turn it currently is.
///
/// Every operation is total over its full input domain. Illegal coordinates
/// are reported through the [`Piece::Invalid`] sentinel rather than an error,
/// so callers must check return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSession {
    board: Board,
    current_turn: Player,
}

impl GameSession {
    /// Create a session with an empty board. X moves first.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_turn: Player::X,
        }
    }

    /// Whose turn it is.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Clear every cell back to `Empty`. The turn is left untouched, so a
    /// mid-game reset hands the next move to whoever was due to play.
    pub fn reset(&mut self) {
        self.board.clear();
    }

    /// Drop the current player's piece into `column`.
    ///
    /// - Out-of-bounds column: the player forfeits the turn; the turn
    ///   toggles and `Invalid` is returned without touching the board.
    /// - Full column: no move was made, so the turn is preserved and `Empty`
    ///   is returned.
    /// - Otherwise the piece settles on the lowest empty row of the column,
    ///   the turn toggles, and the placed piece is returned.
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        if column < 0 || column >= COLS as i32 {
            self.current_turn = self.current_turn.other();
            return Piece::Invalid;
        }

        match self
            .board
            .drop_piece(column as usize, self.current_turn.to_cell())
        {
            Ok(_row) => {
                let placed = self.current_turn;
                self.current_turn = placed.other();
                placed.into()
            }
            Err(MoveError::ColumnFull(_)) => Piece::Empty,
            Err(MoveError::InvalidColumn(_)) => {
                unreachable!("column bounds checked before dropping")
            }
        }
    }

    /// Look up the piece at `(row, column)`, or `Invalid` when either
    /// coordinate is outside the grid. Row 0 is the bottom row.
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        if row < 0 || column < 0 {
            return Piece::Invalid;
        }
        match self.board.get(row as usize, column as usize) {
            Some(cell) => cell.into(),
            None => Piece::Invalid,
        }
    }

    /// Adjudicate the game.
    ///
    /// Returns `Invalid` while any cell is still empty. On a full board the
    /// players' longest runs (along any single row or column, no diagonals)
    /// are compared: the strictly longer run wins, equal runs tie (`Empty`).
    ///
    /// Note the rule compares run lengths, not piece counts: one long run
    /// beats any number of short ones.
    pub fn game_state(&self) -> Piece {
        if !self.board.is_full() {
            return Piece::Invalid;
        }

        let x_run = self.board.max_run(Cell::X);
        let o_run = self.board.max_run(Cell::O);
        match x_run.cmp(&o_run) {
            Ordering::Greater => Piece::X,
            Ordering::Less => Piece::O,
            Ordering::Equal => Piece::Empty,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
