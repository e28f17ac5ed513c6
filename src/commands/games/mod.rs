//! Shared engine for all interactive button games.

pub mod engine;

pub use engine::{Game, GameManager, GameUpdate};
