use crate::game::{BoardTopology, GameView, Player};

use super::policy::{best_by_gain, Decision, MoveStrategy};

/// Plays the legal move that gains the most discs this turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureMost;

impl<T: BoardTopology> MoveStrategy<T> for CaptureMost {
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        best_by_gain(view, player, view.possible_moves(player)).map(Decision::Place)
    }

    fn name(&self) -> &str {
        "CaptureMost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameEngine, Hex, HexCell, Square, SquareCell};

    #[test]
    fn test_picks_largest_capture() {
        let mut engine = GameEngine::new(Hex::default());
        engine.setup().unwrap();
        engine.place_disc(Player::Black, HexCell::new(2, -1, -1)).unwrap();

        let choice = CaptureMost.choose_move(&engine.view(), Player::White);
        assert_eq!(choice, Some(Decision::Place(HexCell::new(3, -2, -1))));
        engine.place_disc(Player::White, HexCell::new(3, -2, -1)).unwrap();
        assert_eq!(engine.white_score(), 5);
    }

    #[test]
    fn test_square_tie_goes_to_upper_left() {
        let mut engine = GameEngine::new(Square::default());
        engine.setup().unwrap();
        engine.place_disc(Player::Black, SquareCell::new(5, 3)).unwrap();

        // (3,2), (5,2) and (5,4) each flip one disc
        let choice = CaptureMost.choose_move(&engine.view(), Player::White);
        assert_eq!(choice, Some(Decision::Place(SquareCell::new(3, 2))));
    }

    #[test]
    fn test_no_move_when_nothing_legal() {
        let mut engine = GameEngine::new(Hex::default());
        engine.setup().unwrap();
        engine.pass(Player::Black).unwrap();
        engine.pass(Player::White).unwrap();
        assert_eq!(CaptureMost.choose_move(&engine.view(), Player::Black), None);
    }

    #[test]
    fn test_does_not_mutate_engine() {
        let mut engine = GameEngine::new(Square::default());
        engine.setup().unwrap();
        let before = engine.copy_of_grid();
        let _ = CaptureMost.choose_move(&engine.view(), Player::Black);
        assert_eq!(engine.copy_of_grid(), before);
        assert_eq!(engine.turn(), Player::Black);
    }
}
