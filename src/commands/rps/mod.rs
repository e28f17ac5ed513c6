//! One-shot Rock-Paper-Scissors against the bot.

pub mod game;
pub mod run;
pub mod state;
