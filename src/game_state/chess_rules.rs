//! Canonical setup constants.
//!
//! The game starts with white on the front face and black on the back face;
//! the other four faces start empty.

use crate::game_state::chess_types::{Face, PieceKind};

/// Back-rank ordering from column 0 to column 7.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_START_FACE: Face = Face::Front;
pub const WHITE_BACK_RANK_ROW: u8 = 7;
pub const WHITE_PAWN_ROW: u8 = 6;

pub const BLACK_START_FACE: Face = Face::Back;
pub const BLACK_BACK_RANK_ROW: u8 = 0;
pub const BLACK_PAWN_ROW: u8 = 1;
