//! Per-user cooldown gate shared by every command.
//!
//! The tracker only records a timestamp when an acquisition succeeds, so a
//! denied attempt never re-arms the window: spamming a command while on
//! cooldown does not push the unlock time further out.

use crate::constants::DEFAULT_COOLDOWN_SECS;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allowed,
    Denied { remaining: Duration },
}

/// Maps each user to the instant of their last successful gated action.
/// Entries are never evicted; for a single-guild bot the map stays tiny.
#[derive(Default)]
pub struct CooldownTracker {
    last_action: Mutex<HashMap<UserId, Instant>>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether `user` may act, recording the action time on success.
    pub fn try_acquire(&self, user: UserId, cooldown: Duration) -> Gate {
        self.try_acquire_at(user, cooldown, Instant::now())
    }

    /// Same as [`try_acquire`](Self::try_acquire) with an injected clock,
    /// which keeps the timing logic deterministic under test.
    pub fn try_acquire_at(&self, user: UserId, cooldown: Duration, now: Instant) -> Gate {
        let mut map = self
            .last_action
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(last) = map.get(&user) {
            let elapsed = now.saturating_duration_since(*last);
            if elapsed < cooldown {
                return Gate::Denied {
                    remaining: cooldown - elapsed,
                };
            }
        }
        map.insert(user, now);
        Gate::Allowed
    }
}

/// Runs the standard 3-second gate for a slash command. On denial the user is
/// told the remaining wait ephemerally and the command must not proceed.
pub async fn gate_slash(ctx: &Context, interaction: &CommandInteraction, tracker: &CooldownTracker) -> bool {
    match tracker.try_acquire(
        interaction.user.id,
        Duration::from_secs(DEFAULT_COOLDOWN_SECS),
    ) {
        Gate::Allowed => true,
        Gate::Denied { remaining } => {
            let message = CreateInteractionResponseMessage::new()
                .content(format!(
                    "You're on cooldown! Please wait {:.1}s.",
                    remaining.as_secs_f32()
                ))
                .ephemeral(true);
            let builder = CreateInteractionResponse::Message(message);
            if let Err(e) = interaction.create_response(&ctx.http, builder).await {
                tracing::debug!(target: "cooldown", error = ?e, "failed to send cooldown notice");
            }
            false
        }
    }
}
