//! Movement rule table keyed by piece kind.
//!
//! Each kind is described by a set of rays and whether it slides along them.
//! Orthogonal rays follow the face adjacency table across edges; offset rays
//! are same-face only. Pawns have no rays here and are generated by
//! `pawn_moves` instead.

use crate::game_state::chess_types::{Direction, PieceKind};
use crate::moves::bishop_moves::BISHOP_RULE;
use crate::moves::king_moves::KING_RULE;
use crate::moves::knight_moves::KNIGHT_RULE;
use crate::moves::pawn_moves::PAWN_RULE;
use crate::moves::queen_moves::QUEEN_RULE;
use crate::moves::rook_moves::ROOK_RULE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ray {
    /// Straight line that may continue onto neighbouring faces.
    Orthogonal(Direction),
    /// `(d_row, d_col)` step that never leaves the face.
    Offset(i8, i8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRule {
    pub rays: &'static [Ray],
    pub sliding: bool,
}

pub const ORTHOGONAL_RAYS: [Ray; 4] = [
    Ray::Orthogonal(Direction::Up),
    Ray::Orthogonal(Direction::Down),
    Ray::Orthogonal(Direction::Left),
    Ray::Orthogonal(Direction::Right),
];

pub const DIAGONAL_RAYS: [Ray; 4] = [
    Ray::Offset(-1, -1),
    Ray::Offset(-1, 1),
    Ray::Offset(1, -1),
    Ray::Offset(1, 1),
];

/// Indexed by [`PieceKind::index`].
const RULES: [MovementRule; 6] = [
    PAWN_RULE,
    KNIGHT_RULE,
    BISHOP_RULE,
    ROOK_RULE,
    QUEEN_RULE,
    KING_RULE,
];

#[inline]
pub const fn movement_rule(kind: PieceKind) -> MovementRule {
    RULES[kind.index()]
}
