/// Errors that can occur when placing a piece on the board.
///
/// These are produced by the `Result`-based [`Board`](crate::game::Board)
/// layer. The [`GameSession`](crate::game::GameSession) surface never exposes
/// them; it maps each case to the sentinel `Piece` value the game rules call
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of bounds")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}
