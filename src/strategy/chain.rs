use crate::game::{BoardTopology, GameView, Player};

use super::policy::{Decision, MoveStrategy};

/// Ordered fallback: asks each member in turn and returns the first
/// suggestion. Signals no move only when every member does.
pub struct StrategyChain<T: BoardTopology> {
    name: String,
    members: Vec<Box<dyn MoveStrategy<T>>>,
}

impl<T: BoardTopology> StrategyChain<T> {
    pub fn new(name: impl Into<String>) -> Self {
        StrategyChain {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a fallback tried after every member added so far
    pub fn then(mut self, strategy: impl MoveStrategy<T> + 'static) -> Self {
        self.members.push(Box::new(strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: BoardTopology> MoveStrategy<T> for StrategyChain<T> {
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        self.members
            .iter_mut()
            .find_map(|member| member.choose_move(view, player))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        self.members.iter().any(|member| member.is_human())
    }
}
