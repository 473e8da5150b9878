use crate::game::{BoardTopology, GameView, Player};

use super::policy::{best_by_gain, Decision, MoveStrategy};

/// Takes a corner whenever one is legal; corners can never be flipped back.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureCorners;

impl<T: BoardTopology> MoveStrategy<T> for CaptureCorners {
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        best_by_gain(view, player, view.topology().corners()).map(Decision::Place)
    }

    fn name(&self) -> &str {
        "CaptureCorners"
    }
}
