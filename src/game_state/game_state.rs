//! Game state and the host-facing operations on it.
//!
//! `GameState` owns the board plus the transient UI bookkeeping (selection,
//! highlighted destinations, check flag). Host calls never fail loudly: a
//! rejected action leaves the state as it was (apart from clearing the
//! selection) and is reported through `tracing` at debug level. The `try_*`
//! forms return the reason instead.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::RuleConfig;
use crate::errors::{CubeChessError, CubeChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::is_in_check_with;
use crate::topology::slice_rotation::{rotate_slice, Slice, SliceKind};

/// One accepted action, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    Moved {
        mv: CubeMove,
        piece: Piece,
        captured: Option<Piece>,
        played_at: DateTime<Utc>,
    },
    Rotated {
        slice: Slice,
        played_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub selected: Option<Square>,
    pub legal_destinations: BTreeSet<Square>,
    pub in_check: bool,
    pub ply: u16,
    pub history: Vec<HistoryEntry>,
    pub rules: RuleConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_rules(RuleConfig::default())
    }
}

impl GameState {
    /// Standard two-face setup, white to move, default rules.
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleConfig) -> Self {
        Self::from_board(Board::initial_standard_setup(), Color::White, rules)
    }

    /// Start from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Color, rules: RuleConfig) -> Self {
        let in_check = is_in_check_with(&rules.move_generator(), &board, side_to_move);
        Self {
            board,
            side_to_move,
            selected: None,
            legal_destinations: BTreeSet::new(),
            in_check,
            ply: 0,
            history: Vec::new(),
            rules,
        }
    }

    /// Reset to the standard setup, keeping the configured rules.
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.rules.clone());
    }

    /// Destinations of the piece on `square` under the configured rules.
    pub fn destinations_from(&self, square: Square) -> BTreeSet<Square> {
        self.rules.move_generator().destinations(&self.board, square)
    }

    /// Select a piece of the side to move and return its destinations.
    ///
    /// Anything else (empty square, enemy piece, bad coordinate) clears the
    /// selection and returns an empty set.
    pub fn select_square(&mut self, square: Square) -> &BTreeSet<Square> {
        self.clear_selection();

        if !square.is_valid() {
            debug!(?square, "ignoring selection of out-of-range square");
            return &self.legal_destinations;
        }

        match self.board.get(square) {
            Some(piece) if piece.color == self.side_to_move => {
                self.selected = Some(square);
                self.legal_destinations = self.destinations_from(square);
            }
            _ => {}
        }
        &self.legal_destinations
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }

    /// Host form of [`Self::try_apply_move`]: an illegal attempt only clears
    /// the selection.
    pub fn apply_move(&mut self, from: Square, to: Square) -> &GameState {
        if let Err(err) = self.try_apply_move(from, to) {
            debug!(%err, "move rejected");
            self.clear_selection();
        }
        self
    }

    /// Validate and play `from -> to` for the side to move.
    pub fn try_apply_move(&mut self, from: Square, to: Square) -> CubeChessResult<HistoryEntry> {
        for square in [from, to] {
            if !square.is_valid() {
                return Err(CubeChessError::InvalidSquare(square));
            }
        }

        let piece = self.board.get(from).ok_or(CubeChessError::NoPieceToMove(from))?;
        if piece.color != self.side_to_move {
            return Err(CubeChessError::NotSideToMove {
                square: from,
                side_to_move: self.side_to_move,
            });
        }

        let is_legal = if self.selected == Some(from) {
            self.legal_destinations.contains(&to)
        } else {
            self.destinations_from(from).contains(&to)
        };
        if !is_legal {
            return Err(CubeChessError::IllegalDestination { from, to });
        }

        let mv = CubeMove::new(from, to);
        let applied = apply_move_in_place(&mut self.board, mv)?;
        if applied.captured_king() {
            warn!(?mv, captured = ?applied.captured, "king captured");
        }

        let entry = HistoryEntry::Moved {
            mv,
            piece: applied.piece,
            captured: applied.captured,
            played_at: Utc::now(),
        };
        self.history.push(entry.clone());
        self.end_turn();
        info!(
            ?mv,
            piece = ?applied.piece.kind,
            captured = ?applied.captured.map(|p| p.kind),
            side_to_move = ?self.side_to_move,
            in_check = self.in_check,
            "move applied"
        );
        Ok(entry)
    }

    /// Host form of [`Self::try_rotate_slice`].
    pub fn rotate_slice(&mut self, kind: SliceKind, index: u8, clockwise: bool) -> &GameState {
        if let Err(err) = self.try_rotate_slice(Slice::new(kind, index, clockwise)) {
            debug!(%err, "rotation rejected");
        }
        self
    }

    /// Twist a slice. Whether this ends the turn follows
    /// [`RuleConfig::rotation_consumes_turn`].
    pub fn try_rotate_slice(&mut self, slice: Slice) -> CubeChessResult<HistoryEntry> {
        if !rotate_slice(&mut self.board, slice) {
            return Err(CubeChessError::InvalidSliceIndex(slice.index));
        }

        let entry = HistoryEntry::Rotated {
            slice,
            played_at: Utc::now(),
        };
        self.history.push(entry.clone());

        if self.rules.rotation_consumes_turn {
            self.end_turn();
        } else {
            self.clear_selection();
            self.refresh_check();
        }
        info!(?slice, side_to_move = ?self.side_to_move, in_check = self.in_check, "slice rotated");
        Ok(entry)
    }

    /// Uniformly random move for `color`, or `None` when it has no moves.
    pub fn request_opponent_move<R: Rng + ?Sized>(&self, color: Color, rng: &mut R) -> Option<CubeMove> {
        crate::engines::engine_random::request_opponent_move(
            &self.rules.move_generator(),
            &self.board,
            color,
            rng,
        )
    }

    /// Whether both kings are still on the board.
    pub fn kings_present(&self) -> bool {
        self.board.king_square(Color::White).is_some() && self.board.king_square(Color::Black).is_some()
    }

    fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.ply = self.ply.saturating_add(1);
        self.clear_selection();
        self.refresh_check();
    }

    fn refresh_check(&mut self) {
        self.in_check = is_in_check_with(&self.rules.move_generator(), &self.board, self.side_to_move);
        if self.in_check {
            info!(color = ?self.side_to_move, "king in check");
        }
    }
}
