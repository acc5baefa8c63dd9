use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_rules::Ray;
use crate::topology::face_adjacency::neighbor;

/// Longest possible straight line: one great circle of four faces.
pub const MAX_RAY_STEPS: usize = 32;

/// Walk one ray from `from`, inserting every reachable square into `out`.
///
/// The walk stops at the first occupied square, which is included only when
/// it holds an enemy piece. A cross-face walk that comes all the way round
/// to its origin stops there.
pub fn walk_ray(
    board: &Board,
    from: Square,
    mover: Color,
    ray: Ray,
    sliding: bool,
    out: &mut BTreeSet<Square>,
) {
    let limit = if sliding { MAX_RAY_STEPS } else { 1 };

    match ray {
        Ray::Orthogonal(direction) => {
            let mut square = from;
            let mut heading = direction;
            for _ in 0..limit {
                let Some(next) = neighbor(square, heading) else {
                    return;
                };
                if next.square == from || !visit(board, next.square, mover, out) {
                    return;
                }
                square = next.square;
                heading = next.heading;
            }
        }
        Ray::Offset(d_row, d_col) => {
            let mut square = from;
            for _ in 0..limit {
                let Some(next) = square.offset(d_row, d_col) else {
                    return;
                };
                if !visit(board, next, mover, out) {
                    return;
                }
                square = next;
            }
        }
    }
}

/// Record `square` if the mover may land there; `false` once the line is blocked.
#[inline]
fn visit(board: &Board, square: Square, mover: Color, out: &mut BTreeSet<Square>) -> bool {
    match board.get(square) {
        None => {
            out.insert(square);
            true
        }
        Some(occupant) => {
            if occupant.color != mover {
                out.insert(square);
            }
            false
        }
    }
}
