//! Pawn movement.
//!
//! A pawn always advances toward decreasing rows (white) or increasing rows
//! (black) in face-local terms. The single step follows the adjacency table
//! over an edge; diagonal captures and the optional double step stay on the
//! current face.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    BLACK_PAWN_ROW, BLACK_START_FACE, WHITE_PAWN_ROW, WHITE_START_FACE,
};
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_rules::MovementRule;
use crate::topology::face_adjacency::neighbor;

/// Pawns are generated by [`pawn_destinations`], not by the ray walker.
pub const PAWN_RULE: MovementRule = MovementRule {
    rays: &[],
    sliding: false,
};

#[inline]
fn on_start_row(color: Color, square: Square) -> bool {
    match color {
        Color::White => square.face == WHITE_START_FACE && square.row == WHITE_PAWN_ROW,
        Color::Black => square.face == BLACK_START_FACE && square.row == BLACK_PAWN_ROW,
    }
}

pub fn pawn_destinations(
    board: &Board,
    from: Square,
    color: Color,
    double_step: bool,
    out: &mut BTreeSet<Square>,
) {
    let forward = color.pawn_forward();

    if let Some(step) = neighbor(from, forward) {
        if board.get(step.square).is_none() {
            out.insert(step.square);

            if double_step && on_start_row(color, from) {
                let (d_row, d_col) = forward.delta();
                if let Some(two) = from.offset(2 * d_row, 2 * d_col) {
                    if board.get(two).is_none() {
                        out.insert(two);
                    }
                }
            }
        }
    }

    let (d_row, _) = forward.delta();
    for d_col in [-1i8, 1i8] {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.get(target).is_some_and(|p| p.color != color) {
            out.insert(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Face, Piece, PieceKind};
    use crate::move_generation::move_generator::{legal_destinations, MoveGenerator};

    fn sq(face: Face, row: u8, col: u8) -> Square {
        Square::new(face, row, col).expect("test square in range")
    }

    #[test]
    fn white_pawn_steps_toward_row_zero() {
        let board = Board::initial_standard_setup();
        let moves: Vec<Square> = legal_destinations(&board, sq(Face::Front, 6, 4))
            .into_iter()
            .collect();
        assert_eq!(moves, vec![sq(Face::Front, 5, 4)]);
    }

    #[test]
    fn black_pawn_steps_toward_row_seven() {
        let board = Board::initial_standard_setup();
        let moves: Vec<Square> = legal_destinations(&board, sq(Face::Back, 1, 0))
            .into_iter()
            .collect();
        assert_eq!(moves, vec![sq(Face::Back, 2, 0)]);
    }

    #[test]
    fn pawn_crosses_onto_top_face() {
        let mut board = Board::empty();
        let from = sq(Face::Front, 0, 3);
        board.place(from, Piece::new(PieceKind::Pawn, Color::White));
        let moves: Vec<Square> = legal_destinations(&board, from).into_iter().collect();
        assert_eq!(moves, vec![sq(Face::Top, 7, 3)]);
    }

    #[test]
    fn pawn_blocked_across_edge() {
        let mut board = Board::empty();
        let from = sq(Face::Back, 7, 2);
        board.place(from, Piece::new(PieceKind::Pawn, Color::Black));
        board.place(sq(Face::Bottom, 7, 5), Piece::new(PieceKind::Rook, Color::White));
        assert!(legal_destinations(&board, from).is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_on_same_face_only() {
        let mut board = Board::empty();
        let from = sq(Face::Front, 0, 0);
        board.place(from, Piece::new(PieceKind::Pawn, Color::White));
        // Would be diagonal across the edge; never a capture.
        board.place(sq(Face::Top, 7, 1), Piece::new(PieceKind::Rook, Color::Black));
        let moves: Vec<Square> = legal_destinations(&board, from).into_iter().collect();
        assert_eq!(moves, vec![sq(Face::Top, 7, 0)]);

        let from = sq(Face::Front, 4, 4);
        board.place(from, Piece::new(PieceKind::Pawn, Color::White));
        board.place(sq(Face::Front, 3, 3), Piece::new(PieceKind::Knight, Color::Black));
        board.place(sq(Face::Front, 3, 5), Piece::new(PieceKind::Knight, Color::White));
        let moves = legal_destinations(&board, from);
        assert!(moves.contains(&sq(Face::Front, 3, 3)));
        assert!(moves.contains(&sq(Face::Front, 3, 4)));
        assert!(!moves.contains(&sq(Face::Front, 3, 5)));
    }

    #[test]
    fn double_step_only_when_enabled_and_path_clear() {
        let mut board = Board::initial_standard_setup();
        let from = sq(Face::Front, 6, 2);
        assert_eq!(legal_destinations(&board, from).len(), 1);

        let generator = MoveGenerator {
            pawn_double_step: true,
        };
        let moves = generator.destinations(&board, from);
        assert!(moves.contains(&sq(Face::Front, 4, 2)));

        board.place(sq(Face::Front, 4, 2), Piece::new(PieceKind::Pawn, Color::Black));
        let moves = generator.destinations(&board, from);
        assert_eq!(moves.len(), 1);
    }
}
