//! Uniform random opponent.
//!
//! Every (origin, destination) pair of the side to move is equally likely.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::CubeChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, CubeMove};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;

/// Flatten every piece's destinations for `color` and pick one pair.
pub fn request_opponent_move<R: Rng + ?Sized>(
    generator: &MoveGenerator,
    board: &Board,
    color: Color,
    rng: &mut R,
) -> Option<CubeMove> {
    let candidates = generator.all_moves(board, color);
    candidates.as_slice().choose(rng).copied()
}

pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Reproducible sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "CubeChess Random"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn choose_move(&mut self, game_state: &GameState) -> CubeChessResult<EngineOutput> {
        let generator = game_state.rules.move_generator();
        let side = game_state.side_to_move;
        let candidates = generator.all_moves(&game_state.board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine {side:?} candidates {}",
            candidates.len()
        ));
        out.best_move = candidates.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
