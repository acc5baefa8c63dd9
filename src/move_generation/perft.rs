//! Move-tree node counting.
//!
//! Used by benchmarks and as a consistency check on the generator. Moves are
//! not filtered for self-check, and a line ends early once a king has been
//! captured.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check_with;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.king_captures += rhs.king_captures;
    }
}

pub fn perft(generator: &MoveGenerator, board: &Board, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.all_moves(board, side_to_move) {
        // all_moves only yields occupied, in-range origins.
        let Ok((next, applied)) = apply_move(board, mv) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            if applied.captured.is_some() {
                total.captures += 1;
            }
            if applied.captured_king() {
                total.king_captures += 1;
            } else if is_in_check_with(generator, &next, side_to_move.opposite()) {
                total.checks += 1;
            }
            continue;
        }

        if applied.captured_king() {
            continue;
        }
        total.merge(perft(generator, &next, side_to_move.opposite(), depth - 1));
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::all_moves;

    #[test]
    fn depth_one_matches_flat_move_list() {
        let board = Board::initial_standard_setup();
        let counts = perft(&MoveGenerator::default(), &board, Color::White, 1);
        assert_eq!(counts.nodes, all_moves(&board, Color::White).len());
        assert_eq!(counts.king_captures, 0);
    }

    #[test]
    fn depth_zero_is_one_node() {
        let board = Board::empty();
        assert_eq!(
            perft(&MoveGenerator::default(), &board, Color::Black, 0).nodes,
            1
        );
    }

    #[test]
    fn depth_two_sums_replies() {
        let generator = MoveGenerator::default();
        let board = Board::initial_standard_setup();
        let expected: usize = all_moves(&board, Color::White)
            .into_iter()
            .map(|mv| {
                let (next, _) = apply_move(&board, mv).expect("generated move applies");
                all_moves(&next, Color::Black).len()
            })
            .sum();
        assert_eq!(perft(&generator, &board, Color::White, 2).nodes, expected);
    }
}
