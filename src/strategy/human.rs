use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;

use tracing::warn;

use crate::game::{BoardTopology, GameView, Player};

use super::policy::{Decision, MoveStrategy};

/// Source of decisions made by a person. `None` means no answer is
/// available (closed input).
pub trait InputProvider<T: BoardTopology> {
    fn next_decision(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>>;
}

/// One console shared by both sides of a hot-seat game
impl<T: BoardTopology, P: InputProvider<T>> InputProvider<T> for Rc<RefCell<P>> {
    fn next_decision(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        self.borrow_mut().next_decision(view, player)
    }
}

/// Relays whatever the input provider hands back.
pub struct HumanStrategy<I> {
    name: String,
    input: I,
}

impl<I> HumanStrategy<I> {
    pub fn new(name: impl Into<String>, input: I) -> Self {
        HumanStrategy {
            name: name.into(),
            input,
        }
    }
}

impl<T, I> MoveStrategy<T> for HumanStrategy<I>
where
    T: BoardTopology,
    I: InputProvider<T>,
{
    fn choose_move(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        self.input.next_decision(view, player)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

/// Canned decisions, handed out in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput<C> {
    queue: VecDeque<Decision<C>>,
}

impl<C> ScriptedInput<C> {
    pub fn new(decisions: impl IntoIterator<Item = Decision<C>>) -> Self {
        ScriptedInput {
            queue: decisions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl<T: BoardTopology> InputProvider<T> for ScriptedInput<T::Cell> {
    fn next_decision(&mut self, _view: &GameView<'_, T>, _player: Player) -> Option<Decision<T::Cell>> {
        self.queue.pop_front()
    }
}

/// Reads one decision per line: `pass` or a cell in the topology's
/// notation. Unreadable lines are skipped.
pub struct LineInput<T, R, W> {
    topology: T,
    reader: R,
    prompt: W,
}

impl<T: BoardTopology, R: BufRead, W: Write> LineInput<T, R, W> {
    pub fn new(topology: T, reader: R, prompt: W) -> Self {
        LineInput {
            topology,
            reader,
            prompt,
        }
    }

    fn parse(&self, line: &str) -> Option<Decision<T::Cell>> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("pass") {
            return Some(Decision::Pass);
        }
        self.topology.parse_cell(line).map(Decision::Place)
    }
}

impl<T: BoardTopology, R: BufRead, W: Write> InputProvider<T> for LineInput<T, R, W> {
    fn next_decision(&mut self, view: &GameView<'_, T>, player: Player) -> Option<Decision<T::Cell>> {
        let moves: Vec<String> = view
            .possible_moves(player)
            .iter()
            .map(ToString::to_string)
            .collect();
        loop {
            // Prompt failures are ignored; input is still read
            let _ = writeln!(
                self.prompt,
                "Black {} - White {}. Legal: {}",
                view.black_score(),
                view.white_score(),
                if moves.is_empty() { "none, type pass".to_string() } else { moves.join(" ") }
            );
            let _ = write!(self.prompt, "{} to move> ", player.name());
            let _ = self.prompt.flush();

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read move");
                    return None;
                }
            }
            if line.trim().is_empty() {
                continue;
            }
            match self.parse(&line) {
                Some(decision) => return Some(decision),
                None => warn!(input = line.trim(), topology = T::NAME, "unreadable move"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameEngine, Hex, HexCell, Square, SquareCell};
    use std::io::Cursor;

    fn opening<T: BoardTopology>(topology: T) -> GameEngine<T> {
        let mut engine = GameEngine::new(topology);
        engine.setup().unwrap();
        engine
    }

    #[test]
    fn test_human_relays_scripted_input() {
        let engine = opening(Square::default());
        let script = ScriptedInput::new([Decision::Place(SquareCell::new(5, 3)), Decision::Pass]);
        let mut human = HumanStrategy::new("Alice", script);

        let view = engine.view();
        assert_eq!(
            human.choose_move(&view, Player::Black),
            Some(Decision::Place(SquareCell::new(5, 3)))
        );
        assert_eq!(human.choose_move(&view, Player::Black), Some(Decision::Pass));
        assert_eq!(human.choose_move(&view, Player::Black), None);
        assert!(MoveStrategy::<Square>::is_human(&human));
        assert_eq!(MoveStrategy::<Square>::name(&human), "Alice");
    }

    #[test]
    fn test_line_input_parses_cells_and_pass() {
        let engine = opening(Hex::default());
        let view = engine.view();
        let text = "2 -1 -1\nPASS\n";
        let mut input = LineInput::new(Hex::default(), Cursor::new(text), Vec::new());

        assert_eq!(
            input.next_decision(&view, Player::Black),
            Some(Decision::Place(HexCell::new(2, -1, -1)))
        );
        assert_eq!(input.next_decision(&view, Player::White), Some(Decision::Pass));
        assert_eq!(input.next_decision(&view, Player::Black), None);
    }

    #[test]
    fn test_line_input_skips_garbage() {
        let engine = opening(Square::default());
        let text = "\nhello\n1 2 3 4\n3,4\n";
        let mut input = LineInput::new(Square::default(), Cursor::new(text), Vec::new());
        assert_eq!(
            input.next_decision(&engine.view(), Player::Black),
            Some(Decision::Place(SquareCell::new(3, 4)))
        );
    }

    #[test]
    fn test_line_input_prompt_lists_moves() {
        let engine = opening(Square::new(4).unwrap());
        let mut prompt = Vec::new();
        {
            let mut input = LineInput::new(Square::new(4).unwrap(), Cursor::new("pass\n"), &mut prompt);
            input.next_decision(&engine.view(), Player::Black);
        }
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            "Black 2 - White 2. Legal: (2, 0) (3, 1) (0, 2) (1, 3)\nBlack to move> "
        );
    }

    #[test]
    fn test_shared_console() {
        let engine = opening(Square::default());
        let console = Rc::new(RefCell::new(ScriptedInput::new([
            Decision::Place(SquareCell::new(5, 3)),
            Decision::Pass,
        ])));
        let mut black = HumanStrategy::new("one", Rc::clone(&console));
        let mut white = HumanStrategy::new("two", Rc::clone(&console));

        let view = engine.view();
        assert_eq!(
            black.choose_move(&view, Player::Black),
            Some(Decision::Place(SquareCell::new(5, 3)))
        );
        assert_eq!(white.choose_move(&view, Player::White), Some(Decision::Pass));
        assert_eq!(console.borrow().remaining(), 0);
    }
}
