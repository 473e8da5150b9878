use crate::game::{BoardTopology, GameView, Player};

use super::policy::{upper_leftmost, Decision, MoveStrategy};

/// Plays the uppermost-leftmost legal move that does not sit next to a
/// corner, leaving corners out of the opponent's reach.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidNextToCorner;

impl<T: BoardTopology> MoveStrategy<T> for AvoidNextToCorner {
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        let topology = view.topology();
        let candidates = view
            .possible_moves(player)
            .into_iter()
            .filter(|&cell| !topology.is_next_to_corner(cell));
        upper_leftmost(topology, candidates).map(Decision::Place)
    }

    fn name(&self) -> &str {
        "AvoidNextToCorner"
    }
}
