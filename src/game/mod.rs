//! Core Reversi rules: cell coordinates, board topologies, the disc grid,
//! and the game engine with its turn/pass state machine.

mod cell;
mod engine;
mod grid;
mod listener;
mod player;
mod topology;
mod view;

pub use cell::{HexCell, SquareCell};
pub use engine::{GameEngine, Phase, PASSES_TO_END};
pub use grid::BoardGrid;
pub use listener::{GameListener, ListenerRegistry};
pub use player::{DiscState, Player};
pub use topology::{BoardTopology, Hex, Square};
pub use view::GameView;
