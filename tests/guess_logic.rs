//! Tests for the guess-a-number state machine.

use studybot::commands::guess::state::{Feedback, GuessState, GuessStatus};

#[test]
fn starts_in_the_middle_of_the_range() {
    let state = GuessState::new(42, 100);
    assert_eq!(state.current_guess, 50);
    assert_eq!(state.attempts, 0);
    assert_eq!(state.status, GuessStatus::InProgress);
}

#[test]
fn guess_stays_within_bounds() {
    let mut state = GuessState::new(3, 10);
    for _ in 0..50 {
        state.increase();
    }
    assert_eq!(state.current_guess, 10);
    assert!(!state.can_increase());
    assert!(state.can_decrease());

    for _ in 0..50 {
        state.decrease();
    }
    assert_eq!(state.current_guess, 1);
    assert!(!state.can_decrease());
    assert!(state.can_increase());
}

#[test]
fn attempts_increase_exactly_once_per_submit() {
    let mut state = GuessState::new(7, 100);
    for expected in 1..=5u32 {
        state.submit();
        assert_eq!(state.attempts, expected);
    }
    // Adjustment steps never count as attempts.
    state.increase();
    state.decrease();
    assert_eq!(state.attempts, 5);
}

#[test]
fn hint_threshold_selects_coarse_or_fine() {
    // Guess 50 vs target 42: off by 8, fine "too high" hint.
    let mut state = GuessState::new(42, 100);
    assert_eq!(state.submit(), Some(Feedback::TooHigh { coarse: false }));

    // Off by more than 10 gets the coarse hint in both directions.
    let mut state = GuessState::new(10, 100);
    assert_eq!(state.submit(), Some(Feedback::TooHigh { coarse: true }));
    let mut state = GuessState::new(90, 100);
    assert_eq!(state.submit(), Some(Feedback::TooLow { coarse: true }));

    // Exactly at the threshold stays fine.
    let mut state = GuessState::new(40, 100);
    assert_eq!(state.submit(), Some(Feedback::TooHigh { coarse: false }));
}

#[test]
fn winning_scenario_target_42() {
    let mut state = GuessState::new(42, 100);
    assert_eq!(state.submit(), Some(Feedback::TooHigh { coarse: false }));
    for _ in 0..8 {
        state.decrease();
    }
    assert_eq!(state.current_guess, 42);
    assert_eq!(state.submit(), Some(Feedback::Correct));
    assert_eq!(state.status, GuessStatus::Won);
    assert_eq!(state.attempts, 2);
}

#[test]
fn cancel_and_timeout_are_terminal() {
    let mut state = GuessState::new(5, 100);
    state.cancel();
    assert_eq!(state.status, GuessStatus::Cancelled);

    // No terminal status is ever overwritten.
    state.time_out();
    assert_eq!(state.status, GuessStatus::Cancelled);
    assert_eq!(state.submit(), None);
    assert_eq!(state.attempts, 0);
    assert!(!state.increase());
    assert!(!state.decrease());
}

#[test]
fn timeout_loses_against_an_earlier_win() {
    let mut state = GuessState::new(50, 100);
    assert_eq!(state.submit(), Some(Feedback::Correct));
    state.time_out();
    assert_eq!(state.status, GuessStatus::Won);
}

#[test]
fn tiny_max_value_is_clamped() {
    let state = GuessState::new(1, 0);
    assert_eq!(state.max_value, 2);
    assert_eq!(state.current_guess, 1);

    let state = GuessState::with_random_target(1);
    assert_eq!(state.max_value, 2);
    assert!((1..=2).contains(&state.target));
}

#[test]
fn random_target_is_in_range() {
    for _ in 0..100 {
        let state = GuessState::with_random_target(100);
        assert!((1..=100).contains(&state.target));
        assert_eq!(state.current_guess, 50);
    }
}
