//! Tests for the shared cooldown gate, driven with an injected clock.

use serenity::model::id::UserId;
use std::time::{Duration, Instant};
use studybot::cooldown::{CooldownTracker, Gate};

const COOLDOWN: Duration = Duration::from_secs(3);

#[test]
fn second_call_within_window_is_denied() {
    let tracker = CooldownTracker::new();
    let user = UserId::new(1);
    let t0 = Instant::now();

    assert_eq!(tracker.try_acquire_at(user, COOLDOWN, t0), Gate::Allowed);
    match tracker.try_acquire_at(user, COOLDOWN, t0 + Duration::from_secs(1)) {
        Gate::Denied { remaining } => assert_eq!(remaining, Duration::from_secs(2)),
        Gate::Allowed => panic!("expected denial within the window"),
    }
}

#[test]
fn different_identities_do_not_interfere() {
    let tracker = CooldownTracker::new();
    let t0 = Instant::now();

    assert_eq!(
        tracker.try_acquire_at(UserId::new(1), COOLDOWN, t0),
        Gate::Allowed
    );
    assert_eq!(
        tracker.try_acquire_at(UserId::new(2), COOLDOWN, t0 + Duration::from_secs(1)),
        Gate::Allowed
    );
}

#[test]
fn denial_does_not_rearm_the_timer() {
    let tracker = CooldownTracker::new();
    let user = UserId::new(1);
    let t0 = Instant::now();

    assert_eq!(tracker.try_acquire_at(user, COOLDOWN, t0), Gate::Allowed);
    // Hammering the gate while denied must not push the unlock time out.
    for secs in [1, 2] {
        assert!(matches!(
            tracker.try_acquire_at(user, COOLDOWN, t0 + Duration::from_secs(secs)),
            Gate::Denied { .. }
        ));
    }
    assert_eq!(
        tracker.try_acquire_at(user, COOLDOWN, t0 + Duration::from_secs(3)),
        Gate::Allowed
    );
}

#[test]
fn allowed_action_rearms_the_window() {
    let tracker = CooldownTracker::new();
    let user = UserId::new(1);
    let t0 = Instant::now();

    assert_eq!(tracker.try_acquire_at(user, COOLDOWN, t0), Gate::Allowed);
    let t1 = t0 + Duration::from_secs(4);
    assert_eq!(tracker.try_acquire_at(user, COOLDOWN, t1), Gate::Allowed);
    assert!(matches!(
        tracker.try_acquire_at(user, COOLDOWN, t1 + Duration::from_secs(1)),
        Gate::Denied { .. }
    ));
}
