//! Rule configuration.
//!
//! Behaviour that differs between cube-chess variants is kept here instead
//! of being hard-coded. Every field has a default so a partial TOML file (or
//! none at all) is valid.
//!
//! ```toml
//! rotation_consumes_turn = false
//! human_color = "black"
//! opponent_delay_ms = 250
//! pawn_double_step = true
//! seed = 42
//! ```

use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::errors::CubeChessResult;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::MoveGenerator;

pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// A slice twist ends the mover's turn.
    pub rotation_consumes_turn: bool,
    /// Color driven by the host; the other side is the random opponent.
    pub human_color: Color,
    /// Pause before the opponent's reply is applied.
    pub opponent_delay_ms: u64,
    /// Same-face two-square pawn advance from the start row.
    pub pawn_double_step: bool,
    /// Seed for the random opponent; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            rotation_consumes_turn: true,
            human_color: Color::White,
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
            pawn_double_step: false,
            seed: None,
        }
    }
}

impl RuleConfig {
    pub fn from_toml_str(text: &str) -> CubeChessResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> CubeChessResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    #[inline]
    pub fn opponent_color(&self) -> Color {
        self.human_color.opposite()
    }

    #[inline]
    pub fn opponent_delay(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::try_from(self.opponent_delay_ms).unwrap_or(i64::MAX))
    }

    #[inline]
    pub fn move_generator(&self) -> MoveGenerator {
        MoveGenerator {
            pawn_double_step: self.pawn_double_step,
        }
    }
}
