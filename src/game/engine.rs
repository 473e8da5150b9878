use std::collections::HashMap;

use tracing::{debug, info};

use super::grid::BoardGrid;
use super::listener::{GameListener, ListenerRegistry};
use super::player::{DiscState, Player};
use super::topology::BoardTopology;
use super::view::GameView;
use crate::error::GameError;

/// Number of consecutive passes that ends a game.
pub const PASSES_TO_END: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Over,
}

/// Rules, board and turn state for one game on topology `T`.
///
/// All mutations go through `setup`, `place_disc` and `pass`. A failed call
/// never changes any state. Strategies read the engine through
/// [`GameEngine::view`].
#[derive(Debug)]
pub struct GameEngine<T: BoardTopology> {
    grid: BoardGrid<T>,
    turn: Player,
    consecutive_passes: usize,
    phase: Phase,
    listeners: ListenerRegistry,
}

impl<T: BoardTopology> GameEngine<T> {
    /// Create an engine that has not been set up yet
    pub fn new(topology: T) -> Self {
        GameEngine {
            grid: BoardGrid::new(topology),
            turn: Player::Black,
            consecutive_passes: 0,
            phase: Phase::NotStarted,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Reset the board to the opening position with Black to move.
    ///
    /// Allowed before the first game and after a game is over.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if self.phase == Phase::InProgress {
            return Err(GameError::AlreadyStarted);
        }
        self.grid.make_grid();
        self.grid.starter_grid();
        self.turn = Player::Black;
        self.consecutive_passes = 0;
        self.phase = Phase::InProgress;
        debug!(topology = T::NAME, size = self.grid_size(), "board set up");
        Ok(())
    }

    /// Announce the opening turn to listeners
    pub fn start(&mut self) -> Result<(), GameError> {
        self.require_in_progress()?;
        self.listeners.notify_turn_changed(self.turn);
        Ok(())
    }

    pub fn add_listener(&mut self, side: Player, listener: Box<dyn GameListener>) {
        self.listeners.register(side, listener);
    }

    /// Place a disc for `player` at `cell` and flip every captured run.
    ///
    /// Returns the flipped cells, not including `cell` itself.
    pub fn place_disc(&mut self, player: Player, cell: T::Cell) -> Result<Vec<T::Cell>, GameError> {
        self.require_in_progress()?;
        self.require_turn(player)?;
        let flipped = self.flips_for(player, cell)?;

        let disc = player.to_disc();
        self.grid.set_status(cell, disc);
        for &captured in &flipped {
            self.grid.set_status(captured, disc);
        }
        self.turn = player.other();
        self.consecutive_passes = 0;

        debug!(
            player = player.name(),
            cell = %cell,
            flipped = flipped.len(),
            "disc placed"
        );
        self.listeners.notify_turn_changed(self.turn);
        Ok(flipped)
    }

    /// Give up the turn. The second consecutive pass ends the game.
    pub fn pass(&mut self, player: Player) -> Result<(), GameError> {
        self.require_in_progress()?;
        self.require_turn(player)?;

        self.consecutive_passes += 1;
        self.turn = player.other();
        debug!(
            player = player.name(),
            consecutive = self.consecutive_passes,
            "turn passed"
        );

        if self.consecutive_passes >= PASSES_TO_END {
            self.phase = Phase::Over;
            info!(
                black = self.black_score(),
                white = self.white_score(),
                "game over"
            );
        }

        self.listeners.notify_turn_changed(self.turn);
        if self.phase == Phase::Over {
            self.listeners.notify_game_over();
        }
        Ok(())
    }

    /// The cells `player` would flip by playing at `cell`, ignoring whose
    /// turn it is.
    pub fn captures(&self, player: Player, cell: T::Cell) -> Result<Vec<T::Cell>, GameError> {
        self.require_in_progress()?;
        self.flips_for(player, cell)
    }

    pub fn is_move_legal_at(&self, player: Player, cell: T::Cell) -> bool {
        self.captures(player, cell).is_ok()
    }

    /// Every cell where `player` could legally place a disc, in reading
    /// order. Empty unless a game is in progress.
    pub fn possible_moves(&self, player: Player) -> Vec<T::Cell> {
        if self.phase != Phase::InProgress {
            return Vec::new();
        }
        self.grid
            .cells()
            .iter()
            .copied()
            .filter(|&cell| self.flips_for(player, cell).is_ok())
            .collect()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn is_black_turn(&self) -> bool {
        self.turn == Player::Black
    }

    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    pub fn topology(&self) -> &T {
        self.grid.topology()
    }

    pub fn grid_size(&self) -> usize {
        self.grid.topology().size()
    }

    pub fn get_status(&self, cell: T::Cell) -> Result<DiscState, GameError> {
        if self.phase == Phase::NotStarted {
            return Err(GameError::NotStarted);
        }
        self.grid.get_status(cell)
    }

    /// Discs owned by `player`; 0 before setup rather than an error.
    pub fn score(&self, player: Player) -> usize {
        self.grid.count(player.to_disc())
    }

    pub fn black_score(&self) -> usize {
        self.score(Player::Black)
    }

    pub fn white_score(&self) -> usize {
        self.score(Player::White)
    }

    pub fn empty_count(&self) -> usize {
        self.grid.count(DiscState::Empty)
    }

    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// Highest scorer, or both players on a tie. Only final once the game is
    /// over.
    pub fn winners(&self) -> Result<Vec<Player>, GameError> {
        if self.phase == Phase::NotStarted {
            return Err(GameError::NotStarted);
        }
        let (black, white) = (self.black_score(), self.white_score());
        Ok(if black == white {
            vec![Player::Black, Player::White]
        } else if black > white {
            vec![Player::Black]
        } else {
            vec![Player::White]
        })
    }

    pub fn copy_of_grid(&self) -> HashMap<T::Cell, DiscState> {
        self.grid.to_map()
    }

    /// Deep copy of the game state without any listeners
    pub fn branch(&self) -> Self {
        GameEngine {
            grid: self.grid.clone(),
            turn: self.turn,
            consecutive_passes: self.consecutive_passes,
            phase: self.phase,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn view(&self) -> GameView<'_, T> {
        GameView::new(self)
    }

    fn require_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::NotStarted => Err(GameError::NotStarted),
            Phase::Over => Err(GameError::GameOver),
            Phase::InProgress => Ok(()),
        }
    }

    fn require_turn(&self, player: Player) -> Result<(), GameError> {
        if player == self.turn {
            Ok(())
        } else {
            Err(GameError::WrongTurn(player.name()))
        }
    }

    /// Every disc flipped by `player` playing `cell`, over all directions.
    fn flips_for(&self, player: Player, cell: T::Cell) -> Result<Vec<T::Cell>, GameError> {
        match self.grid.get(cell) {
            None => return Err(GameError::InvalidCoordinate(cell.to_string())),
            Some(DiscState::Empty) => {}
            Some(_) => return Err(GameError::OccupiedCell(cell.to_string())),
        }

        let flipped: Vec<T::Cell> = self
            .topology()
            .directions()
            .iter()
            .flat_map(|&direction| self.capture_run(player, cell, direction))
            .collect();

        if flipped.is_empty() {
            Err(GameError::IllegalMove(cell.to_string()))
        } else {
            Ok(flipped)
        }
    }

    /// Opponent discs between `from` and the next own disc along
    /// `direction`. Empty unless the run is closed by one of `player`'s
    /// discs on the board.
    fn capture_run(&self, player: Player, from: T::Cell, direction: T::Cell) -> Vec<T::Cell> {
        let mut run = Vec::new();
        let mut cursor = from + direction;

        loop {
            match self.grid.get(cursor).and_then(DiscState::owner) {
                Some(owner) if owner != player => {
                    run.push(cursor);
                    cursor = cursor + direction;
                }
                Some(_) if !run.is_empty() => return run,
                _ => return Vec::new(),
            }
        }
    }
}
