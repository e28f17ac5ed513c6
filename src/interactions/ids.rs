//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and enables future refactors.

// Tic-Tac-Toe cells
pub const TTT_CELL_PREFIX: &str = "ttt_cell_"; // followed by x + _ + y

// Guess-number controls
pub const GUESS_INCREASE: &str = "guess_increase";
pub const GUESS_DECREASE: &str = "guess_decrease";
pub const GUESS_SUBMIT: &str = "guess_submit";
pub const GUESS_CANCEL: &str = "guess_cancel";

// Rock-Paper-Scissors controls
pub const RPS_CHOICE_PREFIX: &str = "rps_choice_"; // followed by rock | paper | scissors

/// Parse a cell custom_id into (x, y). Expected form: `ttt_cell_<x>_<y>`
/// with both coordinates in 0..3.
pub fn parse_cell_id(id: &str) -> Option<(usize, usize)> {
    let rest = id.strip_prefix(TTT_CELL_PREFIX)?;
    let (x_str, y_str) = rest.split_once('_')?;
    let x = x_str.parse::<usize>().ok()?;
    let y = y_str.parse::<usize>().ok()?;
    if x > 2 || y > 2 {
        return None;
    }
    Some((x, y))
}

/// Build the cell custom_id for (x, y).
pub fn cell_id(x: usize, y: usize) -> String {
    format!("{TTT_CELL_PREFIX}{x}_{y}")
}
