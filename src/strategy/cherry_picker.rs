use crate::game::{BoardTopology, GameView, Player, PASSES_TO_END};

use super::policy::{Decision, MoveStrategy};

/// Ends the game by passing when the opponent has just passed and the
/// acting player is ahead. Otherwise defers to whatever comes next.
#[derive(Debug, Clone, Copy, Default)]
pub struct CherryPicker;

impl<T: BoardTopology> MoveStrategy<T> for CherryPicker {
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        let leading = view.score(player) > view.score(player.other());
        let one_pass_from_end = view.consecutive_passes() + 1 == PASSES_TO_END;
        (leading && one_pass_from_end).then_some(Decision::Pass)
    }

    fn name(&self) -> &str {
        "CherryPicker"
    }
}
