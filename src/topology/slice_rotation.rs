//! Rubik's-cube style slice twists.
//!
//! A row slice cycles one row through the horizontal ring
//! (front, right, back, left); a column slice cycles one column through the
//! vertical ring (front, top, back, bottom). Column slices pass over the
//! poles, so the back face is read and written mirrored: column `i` becomes
//! `7 - i` and the row order is reversed.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Face, Piece, FACE_SIZE};

const LAST: u8 = FACE_SIZE - 1;

/// Clockwise row order: each face's row moves onto the next face.
const ROW_RING: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

/// Clockwise column order: each face's column moves onto the next face.
const COLUMN_RING: [Face; 4] = [Face::Front, Face::Top, Face::Back, Face::Bottom];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceKind {
    Row,
    Column,
}

/// A full twist request as forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    pub kind: SliceKind,
    pub index: u8,
    pub clockwise: bool,
}

impl Slice {
    pub const fn new(kind: SliceKind, index: u8, clockwise: bool) -> Self {
        Self {
            kind,
            index,
            clockwise,
        }
    }

    /// The twist that undoes this one.
    pub const fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }
}

type Line = [Option<Piece>; FACE_SIZE as usize];

/// Shift four lines one place along the ring (or back, counter-clockwise).
fn cycle(lines: [Line; 4], clockwise: bool) -> [Line; 4] {
    let mut out = lines;
    for (i, line) in lines.into_iter().enumerate() {
        let target = if clockwise { (i + 1) % 4 } else { (i + 3) % 4 };
        out[target] = line;
    }
    out
}

/// Rotate row `index` through front, right, back and left.
///
/// Returns `false` and leaves the board untouched when `index` is out of range.
pub fn rotate_row(board: &mut Board, index: u8, clockwise: bool) -> bool {
    if index > LAST {
        return false;
    }

    let lines = ROW_RING.map(|face| board.row(face, index));
    for (face, line) in ROW_RING.into_iter().zip(cycle(lines, clockwise)) {
        board.set_row(face, index, line);
    }
    true
}

/// Rotate column `index` through front, top, back and bottom.
///
/// Returns `false` and leaves the board untouched when `index` is out of range.
pub fn rotate_column(board: &mut Board, index: u8, clockwise: bool) -> bool {
    if index > LAST {
        return false;
    }

    let lines = COLUMN_RING.map(|face| read_column(board, face, index));
    for (face, line) in COLUMN_RING.into_iter().zip(cycle(lines, clockwise)) {
        write_column(board, face, index, line);
    }
    true
}

/// Apply a [`Slice`] to the board.
pub fn rotate_slice(board: &mut Board, slice: Slice) -> bool {
    match slice.kind {
        SliceKind::Row => rotate_row(board, slice.index, slice.clockwise),
        SliceKind::Column => rotate_column(board, slice.index, slice.clockwise),
    }
}

fn read_column(board: &Board, face: Face, index: u8) -> Line {
    if face == Face::Back {
        let mut line = board.column(face, LAST - index);
        line.reverse();
        line
    } else {
        board.column(face, index)
    }
}

fn write_column(board: &mut Board, face: Face, index: u8, mut line: Line) {
    if face == Face::Back {
        line.reverse();
        board.set_column(face, LAST - index, line);
    } else {
        board.set_column(face, index, line);
    }
}
