use crate::moves::move_rules::{MovementRule, Ray, DIAGONAL_RAYS, ORTHOGONAL_RAYS};

const QUEEN_RAYS: [Ray; 8] = [
    ORTHOGONAL_RAYS[0],
    ORTHOGONAL_RAYS[1],
    ORTHOGONAL_RAYS[2],
    ORTHOGONAL_RAYS[3],
    DIAGONAL_RAYS[0],
    DIAGONAL_RAYS[1],
    DIAGONAL_RAYS[2],
    DIAGONAL_RAYS[3],
];

/// Rook lines (cross-face) plus bishop diagonals (same face).
pub const QUEEN_RULE: MovementRule = MovementRule {
    rays: &QUEEN_RAYS,
    sliding: true,
};

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::legal_destinations;

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let from = Square::new(Face::Top, 2, 5).expect("in range");
        let mut queen_board = Board::empty();
        queen_board.place(from, Piece::new(PieceKind::Queen, Color::Black));
        let mut rook_board = Board::empty();
        rook_board.place(from, Piece::new(PieceKind::Rook, Color::Black));
        let mut bishop_board = Board::empty();
        bishop_board.place(from, Piece::new(PieceKind::Bishop, Color::Black));

        let queen = legal_destinations(&queen_board, from);
        let mut union = legal_destinations(&rook_board, from);
        union.extend(legal_destinations(&bishop_board, from));
        assert_eq!(queen, union);
    }

    #[test]
    fn starting_queen_only_escapes_over_the_bottom_edge() {
        let board = Board::initial_standard_setup();
        let from = Square::new(Face::Front, 7, 3).expect("in range");
        let moves = legal_destinations(&board, from);
        // Eight bottom squares, back(7,4)..back(2,4), and the pawn on back(1,4).
        assert_eq!(moves.len(), 8 + 6 + 1);
        assert!(moves.iter().all(|s| s.face != Face::Front));
        assert!(moves.contains(&Square::new(Face::Back, 1, 4).expect("in range")));
    }
}
