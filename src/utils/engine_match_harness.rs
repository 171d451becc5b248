//! Turn loop driving two players through one game.
//!
//! The harness owns the position. Players only propose moves; every proposal
//! is checked by the rules engine before it is applied, and an illegal
//! proposal ends the game with `GameError::IllegalMove`.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::chess_errors::GameError;
use crate::engines::engine_trait::Player;
use crate::game_state::chess_rules::{RulesEngine, StandardRules};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    Draw,
    MaxPlies,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => f.write_str("stalemate"),
            GameOutcome::Draw => f.write_str("draw"),
            GameOutcome::MaxPlies => f.write_str("ply limit reached"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Stop after this many plies without a result.
    pub max_plies: u16,
    /// Draw the starting position and the position after every move.
    pub render: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_plies: 500,
            render: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub final_position: Position,
    pub final_report: GameReport,
    pub moves: Vec<Move>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Play one game under standard rules. `white` moves first.
pub fn play_game(
    white: &mut dyn Player,
    black: &mut dyn Player,
    renderer: &mut dyn Renderer,
    config: &GameConfig,
) -> Result<GameRecord, GameError> {
    play_game_with_rules(&StandardRules, white, black, renderer, config)
}

pub fn play_game_with_rules(
    rules: &dyn RulesEngine,
    white: &mut dyn Player,
    black: &mut dyn Player,
    renderer: &mut dyn Renderer,
    config: &GameConfig,
) -> Result<GameRecord, GameError> {
    let started_at = Utc::now();
    let mut position = Position::new_game();

    white.new_game();
    black.new_game();
    log::info!("new game: {} (white) vs {} (black)", white.name(), black.name());

    if config.render {
        renderer.draw(&position)?;
    }

    let (outcome, final_report) = loop {
        let report = rules.analyze_board(&position)?;
        match report.status {
            GameStatus::Checkmate => {
                let winner = report.winner.unwrap_or(report.side_to_move.opposite());
                break (GameOutcome::Checkmate { winner }, report);
            }
            GameStatus::Stalemate => break (GameOutcome::Stalemate, report),
            GameStatus::Draw => break (GameOutcome::Draw, report),
            GameStatus::Normal | GameStatus::Check => {}
        }
        if position.history().len() >= usize::from(config.max_plies) {
            break (GameOutcome::MaxPlies, report);
        }

        let color = report.side_to_move;
        let player: &mut dyn Player = match color {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let mv = player.choose_move(&position)?.ok_or_else(|| GameError::PlayerFailed {
            color,
            reason: format!("{} offered no move", player.name()),
        })?;
        if mv.color != color || !rules.is_valid_move(&position, mv) {
            return Err(GameError::IllegalMove { color, mv });
        }

        position = rules.apply_move(&position, mv)?;
        log::debug!("ply {}: {color} plays {mv}", position.history().len());

        white.observe_move(&mv)?;
        black.observe_move(&mv)?;

        if config.render {
            renderer.draw(&position)?;
        }
    };

    log::info!("game over after {} plies: {outcome}", position.history().len());

    Ok(GameRecord {
        outcome,
        moves: position.history().to_vec(),
        final_position: position,
        final_report,
        started_at,
        finished_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::{play_game, GameConfig, GameOutcome};
    use crate::chess_errors::GameError;
    use crate::engines::engine_console::ConsolePlayer;
    use crate::engines::engine_random::RandomPlayer;
    use crate::engines::engine_stream::StreamPlayer;
    use crate::engines::engine_trait::Player;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::{Renderer, StreamRenderer};

    struct CountingRenderer(usize);

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _position: &Position) -> io::Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    fn scripted(moves: &str) -> ConsolePlayer<Cursor<String>, io::Sink> {
        ConsolePlayer::new(Cursor::new(moves.to_owned()), io::sink())
    }

    #[test]
    fn fools_mate_ends_in_checkmate() {
        let mut white = scripted("f2f3\ng2g4\n");
        let mut black = scripted("e7e5\nd8h4\n");
        let mut renderer = CountingRenderer(0);

        let record = play_game(&mut white, &mut black, &mut renderer, &GameConfig::default())
            .expect("scripted game should finish");

        assert_eq!(record.outcome, GameOutcome::Checkmate { winner: Color::Black });
        assert_eq!(record.final_report.status, GameStatus::Checkmate);
        assert_eq!(record.moves.len(), 4);
        assert_eq!(renderer.0, 5);
        assert!(record.finished_at >= record.started_at);
    }

    #[test]
    fn ply_cap_stops_the_game() {
        let mut white = RandomPlayer::seeded(3);
        let mut black = RandomPlayer::seeded(4);
        let config = GameConfig {
            max_plies: 10,
            render: false,
        };
        let mut renderer = CountingRenderer(0);

        let record = play_game(&mut white, &mut black, &mut renderer, &config).expect("random game should run");
        assert!(record.moves.len() <= 10);
        if record.outcome == GameOutcome::MaxPlies {
            assert_eq!(record.moves.len(), 10);
        }
        assert_eq!(renderer.0, 0);
    }

    #[test]
    fn illegal_proposal_is_an_error() {
        // Wire-format player claiming a pawn jump of three squares.
        let mut white = StreamPlayer::new(Color::White, Cursor::new("4;6;4;3;white;pawn;empty\n"), io::sink());
        let mut black = RandomPlayer::seeded(1);
        let mut renderer = StreamRenderer::new(io::sink());

        let result = play_game(&mut white, &mut black, &mut renderer, &GameConfig::default());
        assert!(matches!(
            result,
            Err(GameError::IllegalMove {
                color: Color::White,
                ..
            })
        ));
    }

    #[test]
    fn silent_player_is_a_failure() {
        let mut white = StreamPlayer::new(Color::White, Cursor::new(""), io::sink());
        let mut black = RandomPlayer::seeded(1);
        let mut renderer = CountingRenderer(0);

        let result = play_game(&mut white, &mut black, &mut renderer, &GameConfig::default());
        assert!(matches!(result, Err(GameError::PlayerFailed { color: Color::White, .. })));
        assert_eq!(white.name(), "stream");
    }
}
