use std::io;

use snapshot_chess::engines::engine_random::RandomPlayer;
use snapshot_chess::game_state::chess_types::*;
use snapshot_chess::move_generation::game_analyzer::analyze;
use snapshot_chess::move_generation::legal_move_apply::apply_move;
use snapshot_chess::move_generation::legal_move_checks::is_king_in_check;
use snapshot_chess::move_generation::legal_move_validation::is_valid_move;
use snapshot_chess::utils::engine_match_harness::{play_game, GameConfig, GameOutcome};
use snapshot_chess::utils::move_serializer::{deserialize_move, serialize_move};
use snapshot_chess::utils::render_game_state::StreamRenderer;

const SEEDS: [u64; 4] = [1, 2, 3, 4];

fn quiet_config(max_plies: u16) -> GameConfig {
    GameConfig {
        max_plies,
        render: false,
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let play = |seed: u64| {
        let mut white = RandomPlayer::seeded(seed);
        let mut black = RandomPlayer::seeded(seed + 100);
        let mut renderer = StreamRenderer::new(io::sink());
        play_game(&mut white, &mut black, &mut renderer, &quiet_config(60)).expect("random game should run")
    };

    let first = play(11);
    let second = play(11);
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn replaying_random_games_never_breaks_a_rule() {
    for seed in SEEDS {
        let mut white = RandomPlayer::seeded(seed);
        let mut black = RandomPlayer::seeded(seed ^ 0xA5A5);
        let mut renderer = StreamRenderer::new(io::sink());
        let record =
            play_game(&mut white, &mut black, &mut renderer, &quiet_config(200)).expect("random game should run");

        let mut position = Position::new_game();
        for (ply, mv) in record.moves.iter().enumerate() {
            assert!(is_valid_move(&position, *mv), "seed {seed} ply {ply}: {mv} rejected on replay");
            assert_eq!(deserialize_move(&serialize_move(mv)), Ok(*mv));

            position = apply_move(&position, *mv).expect("replayed move should apply");
            assert_eq!(
                is_king_in_check(&position, mv.color),
                Ok(false),
                "seed {seed} ply {ply}: {mv} left its own king attacked"
            );
        }

        assert_eq!(position, record.final_position);
        let report = analyze(&position).expect("both kings stay on the board");
        assert_eq!(report, record.final_report);
        assert_eq!(report.status.is_game_over(), record.outcome != GameOutcome::MaxPlies);

        match record.outcome {
            GameOutcome::Checkmate { winner } => {
                assert_eq!(report.status, GameStatus::Checkmate);
                assert_eq!(report.winner, Some(winner));
            }
            GameOutcome::Stalemate => assert_eq!(report.status, GameStatus::Stalemate),
            GameOutcome::MaxPlies => assert_eq!(record.moves.len(), 200),
            GameOutcome::Draw => panic!("draws are never produced"),
        }
    }
}
