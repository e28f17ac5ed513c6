//! Tests for the Rock-Paper-Scissors outcome table and round state.

use serenity::model::id::UserId;
use studybot::commands::rps::state::{Choice, Outcome, RpsState, resolve};

#[test]
fn outcome_table() {
    use Choice::*;
    assert_eq!(resolve(Rock, Scissors), Outcome::Win);
    assert_eq!(resolve(Scissors, Paper), Outcome::Win);
    assert_eq!(resolve(Paper, Rock), Outcome::Win);

    assert_eq!(resolve(Scissors, Rock), Outcome::Lose);
    assert_eq!(resolve(Paper, Scissors), Outcome::Lose);
    assert_eq!(resolve(Rock, Paper), Outcome::Lose);

    assert_eq!(resolve(Rock, Rock), Outcome::Tie);
    assert_eq!(resolve(Paper, Paper), Outcome::Tie);
    assert_eq!(resolve(Scissors, Scissors), Outcome::Tie);
}

#[test]
fn round_resolves_exactly_once() {
    let mut state = RpsState::new(UserId::new(1));
    assert!(!state.is_resolved());

    let round = state.play(Choice::Rock).expect("first play resolves");
    assert_eq!(round.0, Choice::Rock);
    assert!(state.is_resolved());

    // A second press changes nothing.
    assert!(state.play(Choice::Paper).is_none());
    assert_eq!(state.result.unwrap().0, Choice::Rock);
}

#[test]
fn choice_keys_parse() {
    assert_eq!(Choice::from_key("rock"), Some(Choice::Rock));
    assert_eq!(Choice::from_key("paper"), Some(Choice::Paper));
    assert_eq!(Choice::from_key("scissors"), Some(Choice::Scissors));
    assert_eq!(Choice::from_key("lizard"), None);
}
