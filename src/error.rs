use std::path::PathBuf;

/// Errors reported by the game engine when a request cannot be honoured.
///
/// Every variant leaves the engine exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {0} is not on this board")]
    InvalidCoordinate(String),

    #[error("cell {0} already holds a disc")]
    OccupiedCell(String),

    #[error("placing at {0} would not capture any discs")]
    IllegalMove(String),

    #[error("it is not {0}'s turn")]
    WrongTurn(&'static str),

    #[error("game has not been set up yet")]
    NotStarted,

    #[error("game is already over")]
    GameOver,

    #[error("game is already in progress")]
    AlreadyStarted,
}

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("{topology} grid size {size} is invalid: {requirement}")]
    InvalidSize {
        topology: &'static str,
        size: usize,
        requirement: &'static str,
    },
}

/// Errors that can occur while driving a game between two strategies.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{player} strategy '{strategy}' made an illegal decision: {source}")]
    IllegalDecision {
        player: &'static str,
        strategy: String,
        source: GameError,
    },

    #[error("game exceeded the limit of {0} turns")]
    TurnLimit(usize),

    #[error("engine error: {0}")]
    Engine(#[from] GameError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
