use std::collections::HashMap;

use super::engine::{GameEngine, Phase};
use super::player::{DiscState, Player};
use super::topology::BoardTopology;
use crate::error::GameError;

/// Read-only window onto a live engine, handed to strategies.
///
/// Nothing reachable through a view can change the engine it was taken
/// from; hypothetical moves run on a branch via [`GameView::simulate`].
pub struct GameView<'a, T: BoardTopology> {
    engine: &'a GameEngine<T>,
}

impl<T: BoardTopology> Clone for GameView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: BoardTopology> Copy for GameView<'_, T> {}

impl<'a, T: BoardTopology> GameView<'a, T> {
    pub fn new(engine: &'a GameEngine<T>) -> Self {
        GameView { engine }
    }

    pub fn topology(&self) -> &'a T {
        self.engine.topology()
    }

    pub fn grid_size(&self) -> usize {
        self.engine.grid_size()
    }

    pub fn get_status(&self, cell: T::Cell) -> Result<DiscState, GameError> {
        self.engine.get_status(cell)
    }

    pub fn possible_moves(&self, player: Player) -> Vec<T::Cell> {
        self.engine.possible_moves(player)
    }

    pub fn is_move_legal_at(&self, player: Player, cell: T::Cell) -> bool {
        self.engine.is_move_legal_at(player, cell)
    }

    pub fn copy_of_grid(&self) -> HashMap<T::Cell, DiscState> {
        self.engine.copy_of_grid()
    }

    pub fn score(&self, player: Player) -> usize {
        self.engine.score(player)
    }

    pub fn black_score(&self) -> usize {
        self.engine.black_score()
    }

    pub fn white_score(&self) -> usize {
        self.engine.white_score()
    }

    pub fn turn(&self) -> Player {
        self.engine.turn()
    }

    pub fn is_black_turn(&self) -> bool {
        self.engine.is_black_turn()
    }

    pub fn consecutive_passes(&self) -> usize {
        self.engine.consecutive_passes()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    pub fn winners(&self) -> Result<Vec<Player>, GameError> {
        self.engine.winners()
    }

    /// Play `cell` for `player` on a disposable copy of the engine.
    pub fn simulate(&self, player: Player, cell: T::Cell) -> Result<GameEngine<T>, GameError> {
        let mut branch = self.engine.branch();
        branch.place_disc(player, cell)?;
        Ok(branch)
    }

    /// Score change for `player` if they played `cell`, `None` if illegal
    pub fn gain(&self, player: Player, cell: T::Cell) -> Option<usize> {
        let after = self.simulate(player, cell).ok()?;
        Some(after.score(player) - self.score(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Hex, HexCell};

    #[test]
    fn test_simulate_does_not_touch_engine() {
        let mut engine = GameEngine::new(Hex::default());
        engine.setup().unwrap();
        let view = engine.view();

        let branch = view.simulate(Player::Black, HexCell::new(2, -1, -1)).unwrap();
        assert_eq!(branch.black_score(), 5);
        assert_eq!(view.black_score(), 3);
        assert_eq!(view.get_status(HexCell::new(2, -1, -1)), Ok(DiscState::Empty));
    }

    #[test]
    fn test_gain_counts_placed_and_flipped() {
        let mut engine = GameEngine::new(Hex::default());
        engine.setup().unwrap();
        let view = engine.view();
        assert_eq!(view.gain(Player::Black, HexCell::new(2, -1, -1)), Some(2));
        assert_eq!(view.gain(Player::Black, HexCell::new(0, 0, 0)), None);
        assert_eq!(view.gain(Player::White, HexCell::new(2, -2, 0)), None);
    }
}
