use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::SessionError;
use crate::game::{BoardTopology, GameEngine, Phase, Player};
use crate::strategy::{Decision, MoveStrategy};

use super::stats::MatchStats;

/// Outcome of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub winners: Vec<Player>,
    pub black_score: usize,
    pub white_score: usize,
    /// Accepted moves plus passes
    pub turns: usize,
    pub passes: usize,
}

impl GameRecord {
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Play one game to completion.
///
/// A game already in progress is continued from its current position;
/// otherwise the engine is set up and started first. A `None` or `Pass`
/// decision passes the turn. An illegal move from a human strategy is
/// logged and the human is asked again.
#[instrument(skip_all, fields(topology = T::NAME, black = black.name(), white = white.name()))]
pub fn play_game<T: BoardTopology>(
    engine: &mut GameEngine<T>,
    black: &mut dyn MoveStrategy<T>,
    white: &mut dyn MoveStrategy<T>,
    max_turns: usize,
) -> Result<GameRecord, SessionError> {
    if engine.phase() != Phase::InProgress {
        engine.setup()?;
        engine.start()?;
    }

    let mut turns = 0;
    let mut passes = 0;
    while !engine.is_game_over() {
        if turns >= max_turns {
            return Err(SessionError::TurnLimit(max_turns));
        }
        let player = engine.turn();
        let strategy: &mut dyn MoveStrategy<T> = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        loop {
            let decision = strategy.choose_move(&engine.view(), player);
            let result = match decision {
                Some(Decision::Place(cell)) => engine.place_disc(player, cell).map(|_| ()),
                Some(Decision::Pass) | None => {
                    passes += 1;
                    engine.pass(player)
                }
            };
            match result {
                Ok(()) => break,
                Err(e) if strategy.is_human() => {
                    warn!(player = player.name(), error = %e, "rejected move, asking again");
                }
                Err(e) => {
                    return Err(SessionError::IllegalDecision {
                        player: player.name(),
                        strategy: strategy.name().to_string(),
                        source: e,
                    })
                }
            }
        }
        turns += 1;
    }

    let record = GameRecord {
        winners: engine.winners()?,
        black_score: engine.black_score(),
        white_score: engine.white_score(),
        turns,
        passes,
    };
    info!(
        black_score = record.black_score,
        white_score = record.white_score,
        turns = record.turns,
        "game finished"
    );
    Ok(record)
}

/// Play `games` consecutive games on one engine and tally the results.
pub fn play_match<T: BoardTopology>(
    topology: T,
    black: &mut dyn MoveStrategy<T>,
    white: &mut dyn MoveStrategy<T>,
    games: usize,
    max_turns: usize,
) -> Result<MatchStats, SessionError> {
    let mut stats = MatchStats::new(black.name(), white.name());
    let mut engine = GameEngine::new(topology);
    for game in 0..games {
        let record = play_game(&mut engine, black, white, max_turns)?;
        info!(game = game + 1, of = games, "match progress");
        stats.record(&record);
    }
    Ok(stats)
}
