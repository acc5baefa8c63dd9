//! Static edge-adjacency table for the six faces.
//!
//! Faces are viewed from outside the cube. Front, Right, Back and Left form
//! a horizontal ring that shares row indices; Top sits above Front with its
//! row 7 on Front's row 0, and Bottom sits below Front with its row 0 on
//! Front's row 7. Crossing onto or off a pole can turn the face-local
//! heading, so every link records the heading on the arrival face.

use crate::game_state::chess_types::{Direction, Face, Square, FACE_SIZE};

const LAST: u8 = FACE_SIZE - 1;

/// How one coordinate of the arrival square is derived from the index along
/// the crossed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Fixed(u8),
    Along,
    Reversed,
}

impl Axis {
    #[inline]
    const fn resolve(self, along: u8) -> u8 {
        match self {
            Axis::Fixed(v) => v,
            Axis::Along => along,
            Axis::Reversed => LAST - along,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeLink {
    face: Face,
    heading: Direction,
    row: Axis,
    col: Axis,
}

const fn link(face: Face, heading: Direction, row: Axis, col: Axis) -> EdgeLink {
    EdgeLink {
        face,
        heading,
        row,
        col,
    }
}

use Axis::{Along, Fixed, Reversed};
use Direction as D;

/// `[face][direction]` in `Face::index` / Up, Down, Left, Right order.
const EDGE_LINKS: [[EdgeLink; 4]; 6] = [
    // Front
    [
        link(Face::Top, D::Up, Fixed(LAST), Along),
        link(Face::Bottom, D::Down, Fixed(0), Along),
        link(Face::Left, D::Left, Along, Fixed(LAST)),
        link(Face::Right, D::Right, Along, Fixed(0)),
    ],
    // Back
    [
        link(Face::Top, D::Down, Fixed(0), Reversed),
        link(Face::Bottom, D::Up, Fixed(LAST), Reversed),
        link(Face::Right, D::Left, Along, Fixed(LAST)),
        link(Face::Left, D::Right, Along, Fixed(0)),
    ],
    // Left
    [
        link(Face::Top, D::Right, Along, Fixed(0)),
        link(Face::Bottom, D::Right, Reversed, Fixed(0)),
        link(Face::Back, D::Left, Along, Fixed(LAST)),
        link(Face::Front, D::Right, Along, Fixed(0)),
    ],
    // Right
    [
        link(Face::Top, D::Left, Reversed, Fixed(LAST)),
        link(Face::Bottom, D::Left, Along, Fixed(LAST)),
        link(Face::Front, D::Left, Along, Fixed(LAST)),
        link(Face::Back, D::Right, Along, Fixed(0)),
    ],
    // Top
    [
        link(Face::Back, D::Down, Fixed(0), Reversed),
        link(Face::Front, D::Down, Fixed(0), Along),
        link(Face::Left, D::Down, Fixed(0), Along),
        link(Face::Right, D::Down, Fixed(0), Reversed),
    ],
    // Bottom
    [
        link(Face::Front, D::Up, Fixed(LAST), Along),
        link(Face::Back, D::Up, Fixed(LAST), Reversed),
        link(Face::Left, D::Up, Fixed(LAST), Reversed),
        link(Face::Right, D::Up, Fixed(LAST), Along),
    ],
];

#[inline]
const fn direction_slot(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// The square reached by one step, together with the heading of travel on
/// the face it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub square: Square,
    pub heading: Direction,
}

/// Neighbouring face reached by leaving `face` across its `direction` edge.
#[inline]
pub fn neighbor_face(face: Face, direction: Direction) -> Face {
    EDGE_LINKS[face.index()][direction_slot(direction)].face
}

/// One straight step from `square` in `direction`, crossing onto the
/// neighbouring face when the step leaves the current one.
///
/// Returns `None` only for an out-of-range square.
pub fn neighbor(square: Square, direction: Direction) -> Option<Neighbor> {
    if !square.is_valid() {
        return None;
    }

    let (d_row, d_col) = direction.delta();
    if let Some(next) = square.offset(d_row, d_col) {
        return Some(Neighbor {
            square: next,
            heading: direction,
        });
    }

    let edge = EDGE_LINKS[square.face.index()][direction_slot(direction)];
    let along = match direction {
        Direction::Up | Direction::Down => square.col,
        Direction::Left | Direction::Right => square.row,
    };

    Some(Neighbor {
        square: Square::at(edge.face, edge.row.resolve(along), edge.col.resolve(along)),
        heading: edge.heading,
    })
}

/// The coordinate continuing a straight line that leaves `(face, row, col)`
/// moving in `direction`.
#[inline]
pub fn adjacent(face: Face, row: u8, col: u8, direction: Direction) -> Option<Square> {
    Square::new(face, row, col)
        .and_then(|square| neighbor(square, direction))
        .map(|n| n.square)
}
