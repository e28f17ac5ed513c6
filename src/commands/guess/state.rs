//! Pure state for the guess-a-number game. All mutation goes through the
//! methods below, each of which is a no-op once the game is terminal.

use crate::constants::GUESS_HINT_THRESHOLD;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    InProgress,
    Won,
    Cancelled,
    TimedOut,
}

impl GuessStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GuessStatus::InProgress)
    }
}

/// Outcome of a single submitted guess. `coarse` is true when the guess was
/// off by more than the hint threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    TooLow { coarse: bool },
    TooHigh { coarse: bool },
}

#[derive(Debug, Clone)]
pub struct GuessState {
    pub target: i64,
    pub max_value: i64,
    pub current_guess: i64,
    pub attempts: u32,
    pub status: GuessStatus,
}

impl GuessState {
    /// Builds a game with a known target. The bound is clamped to at least 2
    /// so the starting guess and both adjustment directions stay meaningful.
    pub fn new(target: i64, max_value: i64) -> Self {
        let max_value = max_value.max(2);
        Self {
            target: target.clamp(1, max_value),
            max_value,
            current_guess: max_value / 2,
            attempts: 0,
            status: GuessStatus::InProgress,
        }
    }

    /// Builds a game with a uniformly drawn target in [1, max_value].
    pub fn with_random_target(max_value: i64) -> Self {
        let max_value = max_value.max(2);
        let target = rand::rng().random_range(1..=max_value);
        Self::new(target, max_value)
    }

    pub fn can_increase(&self) -> bool {
        self.current_guess < self.max_value
    }

    pub fn can_decrease(&self) -> bool {
        self.current_guess > 1
    }

    /// Bumps the guess up by one. Returns false (untouched) at the upper
    /// bound or after the game ended.
    pub fn increase(&mut self) -> bool {
        if self.status.is_terminal() || !self.can_increase() {
            return false;
        }
        self.current_guess += 1;
        true
    }

    /// Symmetric to [`increase`](Self::increase), floored at 1.
    pub fn decrease(&mut self) -> bool {
        if self.status.is_terminal() || !self.can_decrease() {
            return false;
        }
        self.current_guess -= 1;
        true
    }

    /// Submits the current guess. Exactly one attempt is counted per call;
    /// a correct guess moves the game to `Won`. Returns `None` if the game
    /// is already over.
    pub fn submit(&mut self) -> Option<Feedback> {
        if self.status.is_terminal() {
            return None;
        }
        self.attempts += 1;
        let feedback = if self.current_guess < self.target {
            let difference = self.target - self.current_guess;
            Feedback::TooLow {
                coarse: difference > GUESS_HINT_THRESHOLD,
            }
        } else if self.current_guess > self.target {
            let difference = self.current_guess - self.target;
            Feedback::TooHigh {
                coarse: difference > GUESS_HINT_THRESHOLD,
            }
        } else {
            self.status = GuessStatus::Won;
            Feedback::Correct
        };
        Some(feedback)
    }

    pub fn cancel(&mut self) {
        if !self.status.is_terminal() {
            self.status = GuessStatus::Cancelled;
        }
    }

    /// Marks the game timed out. A terminal status is never overwritten, so a
    /// late-firing timer loses against a submit or cancel that landed first.
    pub fn time_out(&mut self) {
        if !self.status.is_terminal() {
            self.status = GuessStatus::TimedOut;
        }
    }
}
