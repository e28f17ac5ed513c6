//! Single-player guess-a-number with bisection-style button controls.

pub mod game;
pub mod run;
pub mod state;
