//! # Reversi
//!
//! A Reversi (Othello) engine that plays on hexagonal or square boards,
//! with a family of computer strategies and a headless match runner.
//!
//! ## Modules
//!
//! - [`game`]: Core rules: cells, board topologies, grid, engine, listeners
//! - [`strategy`]: Strategy trait, computer players, fallback chains, human input
//! - [`session`]: Game driver and match statistics
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod strategy;
