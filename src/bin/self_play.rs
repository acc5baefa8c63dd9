//! Random-versus-random self-play on the cube.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- rules.toml --plies 200 --twist-every 7`
//!
//! Logging follows `RUST_LOG` (default `info`). The final position is
//! printed as a cube net.

use chrono::{TimeDelta, Utc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cube_chess::config::RuleConfig;
use cube_chess::controller::turn_controller::{TurnController, TurnPhase};
use cube_chess::engines::engine_random::RandomEngine;
use cube_chess::engines::engine_trait::Engine;
use cube_chess::errors::CubeChessResult;
use cube_chess::game_state::chess_types::FACE_SIZE;
use cube_chess::topology::slice_rotation::{Slice, SliceKind};
use cube_chess::utils::render_game_state::render_game_state;

struct SelfPlayArgs {
    config_path: Option<String>,
    plies: usize,
    twist_every: Option<usize>,
}

fn parse_args() -> Result<SelfPlayArgs, String> {
    let mut args = SelfPlayArgs {
        config_path: None,
        plies: 120,
        twist_every: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--plies" => {
                let value = iter.next().ok_or("--plies needs a value")?;
                args.plies = value.parse().map_err(|_| format!("bad ply count: {value}"))?;
            }
            "--twist-every" => {
                let value = iter.next().ok_or("--twist-every needs a value")?;
                let n: usize = value.parse().map_err(|_| format!("bad twist interval: {value}"))?;
                args.twist_every = (n > 0).then_some(n);
            }
            other if other.starts_with("--") => return Err(format!("unknown flag {other}")),
            path => args.config_path = Some(path.to_owned()),
        }
    }
    Ok(args)
}

/// The "human" side is played by a second random engine through the same
/// controller API a host would use.
fn run(args: SelfPlayArgs) -> CubeChessResult<()> {
    let rules = match &args.config_path {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };
    let human_seed = rules.seed.map(|seed| seed.wrapping_add(1));
    let mut human = RandomEngine::from_seed_option(human_seed);

    let mut now = Utc::now();
    let mut controller = TurnController::new(rules, now);
    let step = controller.state().rules.opponent_delay() + TimeDelta::milliseconds(1);

    for ply in 0..args.plies {
        if !controller.state().kings_present() {
            info!(ply, "a king has been captured");
            break;
        }
        match controller.phase() {
            TurnPhase::NoLegalMoves(color) => {
                warn!(?color, ply, "no legal moves, stopping");
                break;
            }
            TurnPhase::OpponentThinking { .. } => {
                now += step;
                controller.poll(now)?;
            }
            TurnPhase::HumanToMove => {
                let twist = args.twist_every.is_some_and(|n| ply % n == n - 1);
                if twist {
                    let index = (ply % FACE_SIZE as usize) as u8;
                    let kind = if ply % 2 == 0 { SliceKind::Row } else { SliceKind::Column };
                    controller.rotate_slice(Slice::new(kind, index, true), now)?;
                    continue;
                }
                let output = human.choose_move(controller.state())?;
                let Some(mv) = output.best_move else {
                    warn!(ply, "human side has nothing to play");
                    break;
                };
                controller.apply_move(mv.from, mv.to, now)?;
            }
        }
    }

    let state = controller.state();
    info!(plies = state.ply, history = state.history.len(), "self-play finished");
    println!("{}", render_game_state(state));
    Ok(())
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    run(args).map_err(|err| err.to_string())
}
