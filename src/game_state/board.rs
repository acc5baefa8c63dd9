//! Six-face occupancy grid.
//!
//! `Board` stores one 8x8 grid of optional pieces per face. Reads of an
//! out-of-range square come back empty and writes to one are ignored, so
//! malformed host coordinates never panic inside the engine.

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;

type FaceGrid = [[Option<Piece>; FACE_SIZE as usize]; FACE_SIZE as usize];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    faces: [FaceGrid; 6],
}

impl Board {
    /// A board with every square empty.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// White on the front face (rows 6-7), black on the back face (rows 0-1).
    pub fn initial_standard_setup() -> Self {
        let mut board = Self::empty();

        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            let col = col as u8;
            board.place(
                Square::at(WHITE_START_FACE, WHITE_BACK_RANK_ROW, col),
                Piece::new(*kind, Color::White),
            );
            board.place(
                Square::at(WHITE_START_FACE, WHITE_PAWN_ROW, col),
                Piece::new(PieceKind::Pawn, Color::White),
            );
            board.place(
                Square::at(BLACK_START_FACE, BLACK_BACK_RANK_ROW, col),
                Piece::new(*kind, Color::Black),
            );
            board.place(
                Square::at(BLACK_START_FACE, BLACK_PAWN_ROW, col),
                Piece::new(PieceKind::Pawn, Color::Black),
            );
        }

        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.faces[square.face.index()]
            .get(square.row as usize)
            .and_then(|row| row.get(square.col as usize))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(cell) = self.faces[square.face.index()]
            .get_mut(square.row as usize)
            .and_then(|row| row.get_mut(square.col as usize))
        {
            *cell = piece;
        }
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// Remove and return whatever occupies `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square);
        self.set(square, None);
        piece
    }

    /// Copy of one row of a face, column 0 first. Out-of-range rows read empty.
    pub fn row(&self, face: Face, row: u8) -> [Option<Piece>; FACE_SIZE as usize] {
        self.faces[face.index()]
            .get(row as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Copy of one column of a face, row 0 first. Out-of-range columns read empty.
    pub fn column(&self, face: Face, col: u8) -> [Option<Piece>; FACE_SIZE as usize] {
        if col >= FACE_SIZE {
            return Default::default();
        }
        let grid = &self.faces[face.index()];
        std::array::from_fn(|row| grid[row][col as usize])
    }

    /// Overwrite one row; ignored when `row` is out of range.
    pub fn set_row(&mut self, face: Face, row: u8, cells: [Option<Piece>; FACE_SIZE as usize]) {
        if let Some(line) = self.faces[face.index()].get_mut(row as usize) {
            *line = cells;
        }
    }

    /// Overwrite one column; ignored when `col` is out of range.
    pub fn set_column(&mut self, face: Face, col: u8, cells: [Option<Piece>; FACE_SIZE as usize]) {
        if col >= FACE_SIZE {
            return;
        }
        let grid = &mut self.faces[face.index()];
        for (row, cell) in cells.into_iter().enumerate() {
            grid[row][col as usize] = cell;
        }
    }

    /// Every square of the cube in `(face, row, col)` order.
    pub fn squares() -> impl Iterator<Item = Square> {
        Face::ALL.into_iter().flat_map(|face| {
            (0..FACE_SIZE).flat_map(move |row| (0..FACE_SIZE).map(move |col| Square::at(face, row, col)))
        })
    }

    /// Occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Self::squares().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// First king of `color` found scanning the faces in order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(square, _)| square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_has_sixteen_pieces_per_side() {
        let board = Board::initial_standard_setup();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        for face in [Face::Left, Face::Right, Face::Top, Face::Bottom] {
            assert!(board.pieces().all(|(sq, _)| sq.face != face));
        }
    }

    #[test]
    fn standard_setup_places_kings_on_column_four() {
        let board = Board::initial_standard_setup();
        assert_eq!(
            board.king_square(Color::White),
            Some(Square::at(Face::Front, 7, 4))
        );
        assert_eq!(
            board.king_square(Color::Black),
            Some(Square::at(Face::Back, 0, 4))
        );
        assert_eq!(
            board.get(Square::at(Face::Front, 7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn out_of_range_access_is_inert() {
        let mut board = Board::initial_standard_setup();
        let bogus = Square {
            face: Face::Front,
            row: 9,
            col: 2,
        };
        assert_eq!(board.get(bogus), None);
        let before = board.clone();
        board.set(bogus, Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_lines_read_empty_and_ignore_writes() {
        let mut board = Board::initial_standard_setup();
        let before = board.clone();
        assert!(board.row(Face::Front, 8).iter().all(Option::is_none));
        assert!(board.column(Face::Back, 200).iter().all(Option::is_none));

        let rooks = [Some(Piece::new(PieceKind::Rook, Color::Black)); FACE_SIZE as usize];
        board.set_row(Face::Front, 8, rooks);
        board.set_column(Face::Top, 9, rooks);
        assert_eq!(board, before);
    }

    #[test]
    fn column_round_trips_through_set_column() {
        let mut board = Board::initial_standard_setup();
        let col = board.column(Face::Front, 2);
        board.set_column(Face::Top, 2, col);
        assert_eq!(board.column(Face::Top, 2), col);
        assert_eq!(
            board.get(Square::at(Face::Top, 7, 2)),
            Some(Piece::new(PieceKind::Bishop, Color::White))
        );
    }
}
