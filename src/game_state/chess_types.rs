//! Core value types shared by every layer of the cube engine.
//!
//! Everything here is `Copy`: pieces are replaced on the board rather than
//! mutated, and squares are plain coordinates with no identity.

use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Number of rows (and columns) on every face.
pub const FACE_SIZE: u8 = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction a pawn of this color advances on any face.
    #[inline]
    pub const fn pawn_forward(self) -> Direction {
        match self {
            Color::White => Direction::Up,
            Color::Black => Direction::Down,
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Rook, bishop and queen move any distance along a line.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

/// A colored piece occupying one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// One of the six 8x8 boards forming the cube surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Back => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Top => 4,
            Face::Bottom => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

/// Face-local direction of travel. `Up` decreases the row, `Right`
/// increases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (d_row, d_col) of one step on the same face.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A cell of the cube board: `(face, row, col)` with row and col in `0..=7`.
///
/// Fields are public so hosts can forward raw click coordinates; engine
/// entry points check [`Square::is_valid`] before trusting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Validating constructor.
    #[inline]
    pub const fn new(face: Face, row: u8, col: u8) -> Option<Self> {
        if row < FACE_SIZE && col < FACE_SIZE {
            Some(Self { face, row, col })
        } else {
            None
        }
    }

    /// Constructor for coordinates already known to be in range.
    #[inline]
    pub(crate) const fn at(face: Face, row: u8, col: u8) -> Self {
        Self { face, row, col }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row < FACE_SIZE && self.col < FACE_SIZE
    }

    /// Same-face offset, `None` if it leaves the face or `self` is out of range.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        if !self.is_valid() {
            return None;
        }
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..FACE_SIZE as i8).contains(&row) && (0..FACE_SIZE as i8).contains(&col) {
            Some(Self::at(self.face, row as u8, col as u8))
        } else {
            None
        }
    }
}

/// A candidate or applied move between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeMove {
    pub from: Square,
    pub to: Square,
}

impl CubeMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}
