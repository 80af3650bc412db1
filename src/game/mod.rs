//! Core Piezas game logic: board representation, player types, and the
//! session API with sentinel-based results.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use session::{GameSession, Piece};
