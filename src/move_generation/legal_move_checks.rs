use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::move_generator::MoveGenerator;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// Whether any piece of the opposing color can move onto `color`'s king.
///
/// A missing king reads as "not in check".
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_in_check_with(&MoveGenerator::default(), board, color)
}

pub fn is_in_check_with(generator: &MoveGenerator, board: &Board, color: Color) -> bool {
    let Some(king) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(generator, board, king, color.opposite())
}

pub fn is_square_attacked(
    generator: &MoveGenerator,
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| generator.destinations(board, from).contains(&square))
}

/// Squares of `attacker_color` pieces that can move onto `square`.
pub fn attackers_of(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    let generator = MoveGenerator::default();
    board
        .pieces_of(attacker_color)
        .filter(|(from, _)| generator.destinations(board, *from).contains(&square))
        .map(|(from, _)| from)
        .collect()
}
