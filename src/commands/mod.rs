// This file declares the existence of our command modules.

pub mod fun;
pub mod games;
pub mod guess;
pub mod jokes;
pub mod ping;
pub mod rps;
pub mod tictactoe;
