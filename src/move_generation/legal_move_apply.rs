use crate::errors::{CubeChessError, CubeChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CubeMove, Piece, PieceKind};

/// What a move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl AppliedMove {
    #[inline]
    pub fn captured_king(&self) -> bool {
        self.captured.is_some_and(|p| p.kind == PieceKind::King)
    }
}

/// Move the piece on `mv.from` onto `mv.to`, replacing any occupant.
///
/// Legality is the caller's concern; only a missing origin piece or an
/// out-of-range square is refused.
pub fn apply_move_in_place(board: &mut Board, mv: CubeMove) -> CubeChessResult<AppliedMove> {
    for square in [mv.from, mv.to] {
        if !square.is_valid() {
            return Err(CubeChessError::InvalidSquare(square));
        }
    }
    let piece = board
        .get(mv.from)
        .ok_or(CubeChessError::NoPieceToMove(mv.from))?;

    board.set(mv.from, None);
    let captured = board.take(mv.to);
    board.place(mv.to, piece);

    Ok(AppliedMove { piece, captured })
}

/// Copy-make variant of [`apply_move_in_place`].
pub fn apply_move(board: &Board, mv: CubeMove) -> CubeChessResult<(Board, AppliedMove)> {
    let mut next = board.clone();
    let applied = apply_move_in_place(&mut next, mv)?;
    Ok((next, applied))
}
