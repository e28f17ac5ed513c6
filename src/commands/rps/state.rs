//! The Rock-Paper-Scissors outcome table and round state.

use rand::Rng;
use serenity::model::id::UserId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "rock" => Some(Choice::Rock),
            "paper" => Some(Choice::Paper),
            "scissors" => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Uniform draw, independent of whatever the user picked.
    pub fn random() -> Self {
        match rand::rng().random_range(0..3) {
            0 => Choice::Rock,
            1 => Choice::Paper,
            _ => Choice::Scissors,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        write!(f, "{name}")
    }
}

/// Outcome from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    Win,
    Lose,
}

/// The fixed cyclic dominance: Rock beats Scissors, Scissors beats Paper,
/// Paper beats Rock.
pub fn resolve(user: Choice, bot: Choice) -> Outcome {
    match (user, bot) {
        (u, b) if u == b => Outcome::Tie,
        (Choice::Rock, Choice::Scissors)
        | (Choice::Paper, Choice::Rock)
        | (Choice::Scissors, Choice::Paper) => Outcome::Win,
        _ => Outcome::Lose,
    }
}

/// One-shot round against the bot: `result` is `None` until the player picks,
/// then fixed forever.
pub struct RpsState {
    pub player: UserId,
    pub result: Option<(Choice, Choice, Outcome)>,
}

impl RpsState {
    pub fn new(player: UserId) -> Self {
        Self {
            player,
            result: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }

    /// Resolves the round. Returns `None` if it was already resolved.
    pub fn play(&mut self, user_choice: Choice) -> Option<(Choice, Choice, Outcome)> {
        if self.is_resolved() {
            return None;
        }
        let bot_choice = Choice::random();
        let round = (user_choice, bot_choice, resolve(user_choice, bot_choice));
        self.result = Some(round);
        self.result
    }
}
