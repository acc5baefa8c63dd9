//! Terminal-oriented Unicode rendering of the cube as an unfolded net.
//!
//! ```text
//!         top
//! left  front  right  back
//!         bottom
//! ```
//!
//! Used by the self-play driver and in tests; graphical hosts render from
//! the board directly.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

const CELL_GAP: &str = " ";
const FACE_GAP: &str = "  ";

/// Width in chars of one rendered face row (8 cells joined by single spaces).
const FACE_WIDTH: usize = FACE_SIZE as usize * 2 - 1;

/// Render the board as an unfolded cube net.
pub fn render_board(board: &Board) -> String {
    let blank = " ".repeat(FACE_WIDTH);
    let mut out = String::new();

    let pole_indent = format!("{blank}{FACE_GAP}");
    push_label_line(&mut out, &[(Some(&pole_indent), Face::Top)]);
    for row in 0..FACE_SIZE {
        out.push_str(&pole_indent);
        out.push_str(&render_face_row(board, Face::Top, row));
        out.push('\n');
    }

    let ring = [Face::Left, Face::Front, Face::Right, Face::Back];
    push_label_line(&mut out, &ring.map(|face| (None, face)));
    for row in 0..FACE_SIZE {
        let cells: Vec<String> = ring.iter().map(|face| render_face_row(board, *face, row)).collect();
        out.push_str(&cells.join(FACE_GAP));
        out.push('\n');
    }

    push_label_line(&mut out, &[(Some(&pole_indent), Face::Bottom)]);
    for row in 0..FACE_SIZE {
        out.push_str(&pole_indent);
        out.push_str(&render_face_row(board, Face::Bottom, row));
        out.push('\n');
    }

    out
}

/// Board plus a status line for the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(&game_state.board);
    out.push_str(&format!(
        "{:?} to move{}\n",
        game_state.side_to_move,
        if game_state.in_check { " (check)" } else { "" }
    ));
    out
}

fn push_label_line(out: &mut String, labels: &[(Option<&String>, Face)]) {
    let mut line = String::new();
    for (i, (indent, face)) in labels.iter().enumerate() {
        if let Some(indent) = indent {
            line.push_str(indent);
        } else if i > 0 {
            line.push_str(FACE_GAP);
        }
        line.push_str(&format!("{:<width$}", face.name(), width = FACE_WIDTH));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn render_face_row(board: &Board, face: Face, row: u8) -> String {
    (0..FACE_SIZE)
        .map(|col| match board.get(Square::at(face, row, col)) {
            Some(piece) => piece_to_unicode(piece).to_string(),
            None => "·".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(CELL_GAP)
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
