//! Destination generation for a single square or a whole side.
//!
//! Moves that leave the mover's own king attacked are not filtered out.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, CubeMove, PieceKind, Square};
use crate::move_generation::legal_move_shared::walk_ray;
use crate::moves::move_rules::movement_rule;
use crate::moves::pawn_moves::pawn_destinations;

/// Generator options that change which moves exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveGenerator {
    /// Allow a same-face two-square advance from the pawn start row.
    pub pawn_double_step: bool,
}

impl MoveGenerator {
    /// Every square the piece on `square` may move to or capture on.
    ///
    /// Empty or out-of-range squares yield an empty set.
    pub fn destinations(&self, board: &Board, square: Square) -> BTreeSet<Square> {
        let mut out = BTreeSet::new();
        if !square.is_valid() {
            return out;
        }
        let Some(piece) = board.get(square) else {
            return out;
        };

        if piece.kind == PieceKind::Pawn {
            pawn_destinations(board, square, piece.color, self.pawn_double_step, &mut out);
            return out;
        }

        let rule = movement_rule(piece.kind);
        for ray in rule.rays {
            walk_ray(board, square, piece.color, *ray, rule.sliding, &mut out);
        }
        out
    }

    /// Every (origin, destination) pair available to `color`.
    pub fn all_moves(&self, board: &Board, color: Color) -> Vec<CubeMove> {
        board
            .pieces_of(color)
            .flat_map(|(from, _)| {
                self.destinations(board, from)
                    .into_iter()
                    .map(move |to| CubeMove::new(from, to))
            })
            .collect()
    }
}

/// [`MoveGenerator::destinations`] with default options.
#[inline]
pub fn legal_destinations(board: &Board, square: Square) -> BTreeSet<Square> {
    MoveGenerator::default().destinations(board, square)
}

/// [`MoveGenerator::all_moves`] with default options.
#[inline]
pub fn all_moves(board: &Board, color: Color) -> Vec<CubeMove> {
    MoveGenerator::default().all_moves(board, color)
}
