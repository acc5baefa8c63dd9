//! Human-readable square names.
//!
//! A square is written `<face>:<file><rank>`, for example `front:e2`. Files
//! `a..h` are columns 0..7 and ranks `8..1` are rows 0..7, so white's
//! starting pawns stand on rank 2 of the front face as in ordinary chess.

use std::fmt;
use std::str::FromStr;

use crate::errors::CubeChessError;
use crate::game_state::chess_types::{Face, Square, FACE_SIZE};

impl FromStr for Face {
    type Err = CubeChessError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Face::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CubeChessError::UnknownFace(name.to_owned()))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse `front:e2` style notation.
pub fn parse_square(text: &str) -> Result<Square, CubeChessError> {
    let (face, cell) = text
        .split_once(':')
        .ok_or_else(|| CubeChessError::InvalidSquareNotation(text.to_owned()))?;
    let face: Face = face.parse()?;

    let bytes = cell.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(CubeChessError::InvalidSquareNotation(text.to_owned()));
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(CubeChessError::InvalidSquareNotation(text.to_owned()));
    }

    let col = file - b'a';
    let row = FACE_SIZE - (rank - b'0');
    Square::new(face, row, col).ok_or_else(|| CubeChessError::InvalidSquareNotation(text.to_owned()))
}

/// Inverse of [`parse_square`]. Out-of-range squares are refused.
pub fn square_to_notation(square: Square) -> Result<String, CubeChessError> {
    if !square.is_valid() {
        return Err(CubeChessError::InvalidSquare(square));
    }
    let file = char::from(b'a' + square.col);
    let rank = char::from(b'0' + (FACE_SIZE - square.row));
    Ok(format!("{}:{file}{rank}", square.face))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match square_to_notation(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}:({},{})", self.face, self.row, self.col),
        }
    }
}
