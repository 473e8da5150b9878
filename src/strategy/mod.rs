//! Move-selection policies: the `MoveStrategy` trait, the built-in
//! computer players, fallback chains and the human input bridge.

mod avoid_corner;
mod capture_most;
mod chain;
mod cherry_picker;
mod corners;
mod human;
mod policy;
mod presets;
mod random;

pub use avoid_corner::AvoidNextToCorner;
pub use capture_most::CaptureMost;
pub use chain::StrategyChain;
pub use cherry_picker::CherryPicker;
pub use corners::CaptureCorners;
pub use human::{HumanStrategy, InputProvider, LineInput, ScriptedInput};
pub use policy::{best_by_gain, upper_leftmost, Decision, MoveStrategy};
pub use presets::StrategyKind;
pub use random::RandomStrategy;
