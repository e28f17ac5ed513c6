// Library entry so integration tests and the binary can reference internal
// modules.
pub mod commands;
pub mod constants;
pub mod cooldown;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod services;

pub use model::AppState;
