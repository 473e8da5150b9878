use std::fmt;

use serde::Serialize;

use crate::game::Player;

use super::play::GameRecord;

/// Running tally over a series of games between two strategies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchStats {
    black: String,
    white: String,
    games: usize,
    black_wins: usize,
    white_wins: usize,
    ties: usize,
    total_turns: usize,
    black_discs: usize,
    white_discs: usize,
}

impl MatchStats {
    pub fn new(black: impl Into<String>, white: impl Into<String>) -> Self {
        MatchStats {
            black: black.into(),
            white: white.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.winners.as_slice() {
            [Player::Black] => self.black_wins += 1,
            [Player::White] => self.white_wins += 1,
            _ => self.ties += 1,
        }
        self.total_turns += game.turns;
        self.black_discs += game.black_score;
        self.white_discs += game.white_score;
    }

    pub fn black_name(&self) -> &str {
        &self.black
    }

    pub fn white_name(&self) -> &str {
        &self.white
    }

    pub fn games(&self) -> usize {
        self.games
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black_wins,
            Player::White => self.white_wins,
        }
    }

    pub fn ties(&self) -> usize {
        self.ties
    }

    /// Fraction of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / self.games as f32
    }

    /// Average number of turns (moves and passes) per game.
    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f32 / self.games as f32
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for MatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Black) vs {} (White), {} games", self.black, self.white, self.games)?;
        for player in Player::BOTH {
            writeln!(
                f,
                "  {} wins: {:>4} ({:.1}%)",
                player.name(),
                self.wins(player),
                self.win_rate(player) * 100.0
            )?;
        }
        writeln!(f, "  Ties:       {:>4}", self.ties)?;
        write!(f, "  Avg length: {:.1} turns", self.average_game_length())
    }
}
