use crate::game::{BoardTopology, GameView, Player};

/// What a strategy wants the acting player to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<C> {
    Place(C),
    Pass,
}

impl<C> Decision<C> {
    pub fn cell(self) -> Option<C> {
        match self {
            Decision::Place(cell) => Some(cell),
            Decision::Pass => None,
        }
    }
}

/// Universal interface for move-selection policies.
pub trait MoveStrategy<T: BoardTopology> {
    /// Pick a decision for `player`, or `None` when this policy has nothing
    /// to suggest. A caller with no other policy to fall back on passes.
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;

    /// Whether decisions come from a person rather than computation.
    fn is_human(&self) -> bool {
        false
    }
}

impl<T: BoardTopology, S: MoveStrategy<T> + ?Sized> MoveStrategy<T> for Box<S> {
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        (**self).choose_move(view, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_human(&self) -> bool {
        (**self).is_human()
    }
}

/// The candidate worth the most discs to `player`. Ties go to the
/// uppermost, then leftmost, cell.
pub fn best_by_gain<T, I>(view: &GameView<'_, T>, player: Player, candidates: I) -> Option<T::Cell>
where
    T: BoardTopology,
    I: IntoIterator<Item = T::Cell>,
{
    let topology = view.topology();
    candidates
        .into_iter()
        .filter_map(|cell| view.gain(player, cell).map(|gain| (gain, cell)))
        .max_by(|(gain_a, a), (gain_b, b)| {
            gain_a
                .cmp(gain_b)
                .then_with(|| topology.reading_key(*b).cmp(&topology.reading_key(*a)))
        })
        .map(|(_, cell)| cell)
}

/// The uppermost, then leftmost, of `candidates`
pub fn upper_leftmost<T, I>(topology: &T, candidates: I) -> Option<T::Cell>
where
    T: BoardTopology,
    I: IntoIterator<Item = T::Cell>,
{
    candidates
        .into_iter()
        .min_by_key(|&cell| topology.reading_key(cell))
}
