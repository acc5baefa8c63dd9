//! Opponent abstraction used by the turn controller.
//!
//! Different move-selection strategies sit behind one trait so the
//! controller does not care how a reply is picked.

use crate::errors::CubeChessResult;
use crate::game_state::chess_types::CubeMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<CubeMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for `game_state.side_to_move`. `best_move == None` means
    /// the side has nothing to play.
    fn choose_move(&mut self, game_state: &GameState) -> CubeChessResult<EngineOutput>;
}
