//! # Piezas
//!
//! Rules engine for Piezas, a two-player Connect-Four-style game played on a
//! fixed 3-row by 4-column vertical grid. Pieces are dropped into columns and
//! settle on the lowest empty row. Once the board is full, the winner is the
//! player with the longest contiguous run of pieces along any single row or
//! column (no diagonals).
//!
//! Board coordinates are bottom-up: row 0 is the bottom row, so a piece
//! dropped into an empty column lands at row 0 and the next piece in that
//! column lands at row 1.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, and the session API
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use piezas::game::{GameSession, Piece};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.drop_piece(2), Piece::X);
//! assert_eq!(session.piece_at(0, 2), Piece::X);
//! assert_eq!(session.game_state(), Piece::Invalid); // not over yet
//! ```

pub mod error;
pub mod game;
