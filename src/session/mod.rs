//! Running games between two strategies and tallying the results.

mod play;
mod stats;

pub use play::{play_game, play_match, GameRecord};
pub use stats::MatchStats;
