use chrono::{DateTime, TimeDelta, Utc};

use cube_chess::config::RuleConfig;
use cube_chess::controller::turn_controller::{TurnController, TurnPhase};
use cube_chess::engines::engine_random::RandomEngine;
use cube_chess::engines::engine_trait::Engine;
use cube_chess::errors::CubeChessError;
use cube_chess::game_state::board::Board;
use cube_chess::game_state::chess_types::{Color, Face, Piece, PieceKind, Square};
use cube_chess::game_state::game_state::{GameState, HistoryEntry};
use cube_chess::move_generation::move_generator::legal_destinations;
use cube_chess::topology::slice_rotation::{rotate_row, Slice, SliceKind};
use cube_chess::utils::square_notation::parse_square;

fn at(text: &str) -> Square {
    parse_square(text).expect("test notation is valid")
}

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
}

#[test]
fn opening_pawn_push_hands_turn_to_black() {
    let mut game = GameState::new_game();
    let (from, to) = (at("front:e2"), at("front:e3"));

    assert!(game.select_square(from).contains(&to));
    game.apply_move(from, to);

    assert_eq!(game.board.get(from), None);
    assert_eq!(
        game.board.get(to),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(game.side_to_move, Color::Black);
    assert!(!game.in_check);
}

#[test]
fn corner_rook_stops_at_first_blocker_on_each_line() {
    let mut board = Board::initial_standard_setup();
    board.place(at("left:e1"), Piece::new(PieceKind::Knight, Color::Black));

    let moves = legal_destinations(&board, at("front:a1"));
    assert!(moves.contains(&at("left:h1")));
    assert!(moves.contains(&at("left:e1")));
    for beyond in ["left:d1", "left:a1", "back:a1", "back:g1"] {
        assert!(!moves.contains(&at(beyond)), "{beyond}");
    }
    // Reached the other way round, over the bottom face.
    assert!(moves.contains(&at("back:h1")));
    assert!(moves.contains(&at("back:h7")));
    assert!(!moves.contains(&at("back:h8")));
    assert!(!moves.contains(&at("front:b1")));
}

#[test]
fn four_row_zero_twists_restore_every_side_face() {
    let mut board = Board::empty();
    let ring = [Face::Front, Face::Right, Face::Back, Face::Left];
    for (i, face) in ring.into_iter().enumerate() {
        let col = i as u8;
        board.place(
            Square::new(face, 0, col).expect("in range"),
            Piece::new(PieceKind::ALL[i], Color::White),
        );
        board.place(
            Square::new(face, 0, 7 - col).expect("in range"),
            Piece::new(PieceKind::ALL[i + 1], Color::Black),
        );
    }
    let original = board.clone();

    for turn in 1..=4 {
        assert!(rotate_row(&mut board, 0, true));
        if turn < 4 {
            assert_ne!(board, original, "after {turn} twists");
        }
    }
    assert_eq!(board, original);
}

#[test]
fn rotations_and_moves_alternate_sides() {
    let mut game = GameState::new_game();
    game.rotate_slice(SliceKind::Row, 3, true);
    assert_eq!(game.side_to_move, Color::Black);

    game.apply_move(at("back:a7"), at("back:a6"));
    assert_eq!(game.side_to_move, Color::White);

    game.rotate_slice(SliceKind::Column, 9, true);
    assert_eq!(game.side_to_move, Color::White, "rejected twist keeps the turn");
    assert_eq!(game.history.len(), 2);
    assert!(matches!(game.history[0], HistoryEntry::Rotated { .. }));
    assert!(matches!(game.history[1], HistoryEntry::Moved { .. }));
}

#[test]
fn error_messages_use_square_notation() {
    let mut game = GameState::new_game();
    let err = game
        .try_apply_move(at("front:e2"), at("front:e5"))
        .expect_err("pawns step one square");
    assert_eq!(
        err.to_string(),
        "front:e5 is not a legal destination from front:e2"
    );
    assert!(matches!(
        game.try_apply_move(at("top:a1"), at("top:a2")),
        Err(CubeChessError::NoPieceToMove(_))
    ));
}

#[test]
fn rules_load_from_toml_file() {
    let path = std::env::temp_dir().join(format!("cube_chess_rules_{}.toml", std::process::id()));
    std::fs::write(&path, "human_color = \"black\"\nopponent_delay_ms = 50\n")
        .expect("temp dir is writable");
    let rules = RuleConfig::load(&path).expect("valid rules file");
    let _ = std::fs::remove_file(&path);

    assert_eq!(rules.human_color, Color::Black);
    assert_eq!(rules.opponent_delay(), TimeDelta::milliseconds(50));
    assert!(matches!(
        RuleConfig::load(path.with_extension("missing")),
        Err(CubeChessError::ConfigIo(_))
    ));
}

/// Play `plies` actions with a seeded random engine standing in for the
/// human, returning the moves in order.
fn seeded_self_play(seed: u64, plies: usize) -> (Vec<(Square, Square)>, GameState) {
    let rules = RuleConfig {
        seed: Some(seed),
        opponent_delay_ms: 10,
        ..RuleConfig::default()
    };
    let mut human = RandomEngine::seeded(seed ^ 0xC0BE);
    let mut now = t0();
    let mut controller = TurnController::new(rules, now);

    for _ in 0..plies {
        if !controller.state().kings_present() {
            break;
        }
        match controller.phase() {
            TurnPhase::NoLegalMoves(_) => break,
            TurnPhase::OpponentThinking { .. } => {
                now += TimeDelta::milliseconds(10);
                controller.poll(now).expect("engine reply applies");
            }
            TurnPhase::HumanToMove => {
                let mv = human
                    .choose_move(controller.state())
                    .expect("random engine never fails")
                    .best_move
                    .expect("human side has a move");
                controller
                    .apply_move(mv.from, mv.to, now)
                    .expect("generated move is legal");
            }
        }
    }

    let moves = controller
        .state()
        .history
        .iter()
        .filter_map(|entry| match entry {
            HistoryEntry::Moved { mv, .. } => Some((mv.from, mv.to)),
            HistoryEntry::Rotated { .. } => None,
        })
        .collect();
    (moves, controller.state().clone())
}

#[test]
fn seeded_self_play_is_reproducible_and_conserves_pieces() {
    let (first, state) = seeded_self_play(2024, 60);
    let (second, _) = seeded_self_play(2024, 60);
    assert_eq!(first, second);
    assert!(!first.is_empty());

    let captures = state
        .history
        .iter()
        .filter(|entry| matches!(entry, HistoryEntry::Moved { captured: Some(_), .. }))
        .count();
    assert_eq!(state.board.piece_count() + captures, 32);

    for (i, entry) in state.history.iter().enumerate() {
        let HistoryEntry::Moved { piece, .. } = entry else {
            continue;
        };
        let expected = if i % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(piece.color, expected, "history entry {i}");
    }
}

#[test]
fn controller_twist_hands_over_to_opponent() {
    let rules = RuleConfig {
        seed: Some(1),
        ..RuleConfig::default()
    };
    let mut controller = TurnController::new(rules, t0());
    controller
        .rotate_slice(Slice::new(SliceKind::Row, 6, false), t0())
        .expect("valid twist");
    assert!(controller.is_busy());
    assert_eq!(
        controller.state().board.get(at("left:a2")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );

    let reply = controller
        .poll(t0() + controller.state().rules.opponent_delay())
        .expect("ok")
        .expect("black replies");
    assert_eq!(
        controller.state().board.get(reply.to).map(|p| p.color),
        Some(Color::Black)
    );
    assert_eq!(controller.phase(), TurnPhase::HumanToMove);
}
