use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{BoardTopology, GameView, Player};

use super::policy::{Decision, MoveStrategy};

/// A strategy that selects uniformly at random from legal moves.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible stream of choices for a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BoardTopology> MoveStrategy<T> for RandomStrategy {
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        let moves = view.possible_moves(player);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(Decision::Place(moves[idx]))
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameEngine, Hex, Square};

    #[test]
    fn test_random_selects_legal_move() {
        let mut strategy = RandomStrategy::new();
        let mut engine = GameEngine::new(Hex::default());
        engine.setup().unwrap();
        let legal = engine.possible_moves(Player::Black);

        for _ in 0..100 {
            let choice = strategy.choose_move(&engine.view(), Player::Black);
            let cell = choice.and_then(Decision::cell).unwrap();
            assert!(legal.contains(&cell), "Move {} is not legal", cell);
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut engine = GameEngine::new(Square::default());
        engine.setup().unwrap();
        let mut a = RandomStrategy::with_seed(7);
        let mut b = RandomStrategy::with_seed(7);
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&engine.view(), Player::Black),
                b.choose_move(&engine.view(), Player::Black)
            );
        }
    }

    #[test]
    fn test_random_plays_full_game() {
        let mut black = RandomStrategy::with_seed(1);
        let mut white = RandomStrategy::with_seed(2);
        let mut engine = GameEngine::new(Square::new(6).unwrap());
        engine.setup().unwrap();

        while !engine.is_game_over() {
            let player = engine.turn();
            let strategy = match player {
                Player::Black => &mut black,
                Player::White => &mut white,
            };
            match strategy.choose_move(&engine.view(), player) {
                Some(Decision::Place(cell)) => {
                    engine.place_disc(player, cell).unwrap();
                }
                _ => engine.pass(player).unwrap(),
            }
        }

        assert!(engine.possible_moves(Player::Black).is_empty());
        assert_eq!(
            engine.black_score() + engine.white_score() + engine.empty_count(),
            36
        );
    }

    #[test]
    fn test_random_name() {
        let strategy = RandomStrategy::new();
        assert_eq!(MoveStrategy::<Hex>::name(&strategy), "Random");
    }
}
