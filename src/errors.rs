//! Errors used throughout the cube engine.
//!
//! Host-facing calls on `GameState` swallow these and leave state untouched;
//! the `try_*` variants hand them back so callers and tests can tell why an
//! action was refused.

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, thiserror::Error)]
pub enum CubeChessError {
    /// Row or column outside `0..=7`.
    #[error("square out of range: {0}")]
    InvalidSquare(Square),

    /// Face name not one of front/back/left/right/top/bottom.
    #[error("unknown face name: {0}")]
    UnknownFace(String),

    #[error("invalid square notation: {0}")]
    InvalidSquareNotation(String),

    #[error("no piece to move on {0}")]
    NoPieceToMove(Square),

    #[error("piece on {square} does not belong to {side_to_move:?}")]
    NotSideToMove { square: Square, side_to_move: Color },

    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Square, to: Square },

    #[error("slice index {0} is out of range")]
    InvalidSliceIndex(u8),

    /// Human input arrived while the opponent's reply is still scheduled.
    #[error("opponent move is pending")]
    OpponentMovePending,

    #[error("it is not the human player's turn")]
    NotHumanTurn,

    #[error("failed to parse rule config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read rule config: {0}")]
    ConfigIo(#[from] std::io::Error),
}

pub type CubeChessResult<T> = Result<T, CubeChessError>;
