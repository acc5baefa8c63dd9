//! Human-versus-engine turn sequencing.
//!
//! The controller owns the game and an opponent engine. When a human action
//! passes the turn to the opponent, its reply is scheduled `opponent_delay`
//! later; the host drives time by calling [`TurnController::poll`] with the
//! current instant. While a reply is pending every human action is refused.
//! A scheduled reply is never cancelled.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::RuleConfig;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{CubeChessError, CubeChessResult};
use crate::game_state::chess_types::{Color, CubeMove, Square};
use crate::game_state::game_state::{GameState, HistoryEntry};
use crate::topology::slice_rotation::Slice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    HumanToMove,
    OpponentThinking { due_at: DateTime<Utc> },
    /// The named side has no move at all. No winner is declared.
    NoLegalMoves(Color),
}

pub struct TurnController<E: Engine = RandomEngine> {
    state: GameState,
    engine: E,
    phase: TurnPhase,
}

impl TurnController<RandomEngine> {
    /// Controller with a random opponent seeded from `rules.seed`.
    pub fn new(rules: RuleConfig, now: DateTime<Utc>) -> Self {
        let engine = RandomEngine::from_seed_option(rules.seed);
        Self::with_engine(rules, engine, now)
    }
}

impl<E: Engine> TurnController<E> {
    pub fn with_engine(rules: RuleConfig, engine: E, now: DateTime<Utc>) -> Self {
        let mut controller = Self {
            state: GameState::with_rules(rules),
            engine,
            phase: TurnPhase::HumanToMove,
        };
        controller.new_game(now);
        controller
    }

    /// Reset the board. If the human plays black the opponent's first move is
    /// scheduled straight away.
    pub fn new_game(&mut self, now: DateTime<Utc>) {
        self.state.reset();
        self.engine.new_game();
        info!(engine = self.engine.name(), human = ?self.state.rules.human_color, "new game");
        self.hand_over(now);
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// An opponent reply is scheduled and human input is locked out.
    #[inline]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, TurnPhase::OpponentThinking { .. })
    }

    fn ensure_human_turn(&self) -> CubeChessResult<()> {
        if self.is_busy() {
            return Err(CubeChessError::OpponentMovePending);
        }
        if self.state.side_to_move != self.state.rules.human_color {
            return Err(CubeChessError::NotHumanTurn);
        }
        Ok(())
    }

    pub fn select_square(&mut self, square: Square) -> &BTreeSet<Square> {
        if let Err(err) = self.ensure_human_turn() {
            debug!(%err, ?square, "selection ignored");
            self.state.clear_selection();
            return &self.state.legal_destinations;
        }
        self.state.select_square(square)
    }

    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        now: DateTime<Utc>,
    ) -> CubeChessResult<HistoryEntry> {
        self.ensure_human_turn()?;
        let entry = self.state.try_apply_move(from, to).inspect_err(|_| {
            self.state.clear_selection();
        })?;
        self.hand_over(now);
        Ok(entry)
    }

    pub fn rotate_slice(&mut self, slice: Slice, now: DateTime<Utc>) -> CubeChessResult<HistoryEntry> {
        self.ensure_human_turn()?;
        let entry = self.state.try_rotate_slice(slice)?;
        self.hand_over(now);
        Ok(entry)
    }

    /// Play the scheduled opponent reply once `now` has reached its due time.
    ///
    /// Returns the move played, or `None` if nothing was due. A reply that
    /// fails (engine error or a move the game refuses) is not retried: the
    /// controller leaves the thinking phase with `NoLegalMoves` and hands
    /// the error back.
    pub fn poll(&mut self, now: DateTime<Utc>) -> CubeChessResult<Option<CubeMove>> {
        let TurnPhase::OpponentThinking { due_at } = self.phase else {
            return Ok(None);
        };
        if now < due_at {
            return Ok(None);
        }

        self.play_scheduled_reply(now).inspect_err(|err| {
            let color = self.state.side_to_move;
            warn!(%err, ?color, "opponent reply failed");
            self.phase = TurnPhase::NoLegalMoves(color);
        })
    }

    fn play_scheduled_reply(&mut self, now: DateTime<Utc>) -> CubeChessResult<Option<CubeMove>> {
        let output = self.engine.choose_move(&self.state)?;
        for line in &output.info_lines {
            debug!(engine = self.engine.name(), "{line}");
        }

        let Some(mv) = output.best_move else {
            let color = self.state.side_to_move;
            warn!(?color, "opponent has no legal moves");
            self.phase = TurnPhase::NoLegalMoves(color);
            return Ok(None);
        };

        self.state.try_apply_move(mv.from, mv.to)?;
        self.hand_over(now);
        Ok(Some(mv))
    }

    /// Decide what happens next after the side to move may have changed.
    fn hand_over(&mut self, now: DateTime<Utc>) {
        let side = self.state.side_to_move;
        let generator = self.state.rules.move_generator();

        self.phase = if side == self.state.rules.opponent_color() {
            let due_at = now + self.state.rules.opponent_delay();
            debug!(%due_at, "opponent reply scheduled");
            TurnPhase::OpponentThinking { due_at }
        } else if generator.all_moves(&self.state.board, side).is_empty() {
            warn!(color = ?side, "human side has no legal moves");
            TurnPhase::NoLegalMoves(side)
        } else {
            TurnPhase::HumanToMove
        };
    }
}
