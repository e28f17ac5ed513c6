//! Two-player Tic-Tac-Toe on a 3×3 button grid.

pub mod game;
pub mod run;
pub mod state;
