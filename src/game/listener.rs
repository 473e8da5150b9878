use std::collections::BTreeMap;
use std::fmt;

use super::player::Player;

/// Receives engine notifications. Calls happen synchronously, after the
/// state change that caused them.
pub trait GameListener {
    /// The turn passed to the other side (or the game was started).
    fn on_turn_changed(&mut self, now_black_turn: bool);

    /// Two consecutive passes ended the game.
    fn on_game_over(&mut self);
}

/// Listeners grouped by the side they act for.
#[derive(Default)]
pub struct ListenerRegistry {
    by_side: BTreeMap<Player, Vec<Box<dyn GameListener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, side: Player, listener: Box<dyn GameListener>) {
        self.by_side.entry(side).or_default().push(listener);
    }

    pub fn len(&self) -> usize {
        self.by_side.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Listeners acting for `side`
    pub fn side_mut(&mut self, side: Player) -> impl Iterator<Item = &mut Box<dyn GameListener>> {
        self.by_side.get_mut(&side).into_iter().flatten()
    }

    /// Listeners acting for the opponent of `side`
    pub fn other_side_mut(
        &mut self,
        side: Player,
    ) -> impl Iterator<Item = &mut Box<dyn GameListener>> {
        self.side_mut(side.other())
    }

    /// Tell both sides whose turn it is now. The side about to move hears
    /// first.
    pub fn notify_turn_changed(&mut self, now_to_move: Player) {
        let now_black_turn = now_to_move == Player::Black;
        for listener in self.side_mut(now_to_move) {
            listener.on_turn_changed(now_black_turn);
        }
        for listener in self.other_side_mut(now_to_move) {
            listener.on_turn_changed(now_black_turn);
        }
    }

    pub fn notify_game_over(&mut self) {
        for listener in self.by_side.values_mut().flatten() {
            listener.on_game_over();
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.by_side.iter().map(|(side, v)| (side, v.len())))
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Turn(&'static str, bool),
        GameOver(&'static str),
    }

    /// Listener that appends every notification to a shared log.
    pub struct Recorder {
        pub tag: &'static str,
        pub log: Rc<RefCell<Vec<Event>>>,
    }

    impl Recorder {
        pub fn boxed(tag: &'static str, log: &Rc<RefCell<Vec<Event>>>) -> Box<dyn GameListener> {
            Box::new(Recorder {
                tag,
                log: Rc::clone(log),
            })
        }
    }

    impl GameListener for Recorder {
        fn on_turn_changed(&mut self, now_black_turn: bool) {
            self.log.borrow_mut().push(Event::Turn(self.tag, now_black_turn));
        }

        fn on_game_over(&mut self) {
            self.log.borrow_mut().push(Event::GameOver(self.tag));
        }
    }

    fn registry_with_log() -> (ListenerRegistry, Rc<RefCell<Vec<Event>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        registry.register(Player::Black, Recorder::boxed("black", &log));
        registry.register(Player::White, Recorder::boxed("white", &log));
        (registry, log)
    }

    #[test]
    fn test_side_to_move_hears_first() {
        let (mut registry, log) = registry_with_log();
        registry.notify_turn_changed(Player::White);
        assert_eq!(
            *log.borrow(),
            vec![Event::Turn("white", false), Event::Turn("black", false)]
        );
    }

    #[test]
    fn test_order_independent_of_registration() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        registry.register(Player::White, Recorder::boxed("white", &log));
        registry.register(Player::Black, Recorder::boxed("black", &log));
        registry.notify_turn_changed(Player::Black);
        assert_eq!(
            *log.borrow(),
            vec![Event::Turn("black", true), Event::Turn("white", true)]
        );
    }

    #[test]
    fn test_game_over_reaches_everyone() {
        let (mut registry, log) = registry_with_log();
        registry.notify_game_over();
        assert_eq!(log.borrow().len(), 2);
        assert!(log.borrow().contains(&Event::GameOver("black")));
        assert!(log.borrow().contains(&Event::GameOver("white")));
    }

    #[test]
    fn test_other_side_lookup() {
        let (mut registry, _log) = registry_with_log();
        assert_eq!(registry.other_side_mut(Player::Black).count(), 1);
        assert_eq!(registry.len(), 2);
    }
}
