//! Shared data structures stored in Serenity's global context via
//! `TypeMapKey`.

use crate::commands::games::engine::GameManager;
use crate::cooldown::CooldownTracker;
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A container for the ShardManager, used to read gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application. An `Arc<AppState>` lives in
/// the global context for access from any command or event handler.
pub struct AppState {
    /// All active game instances, keyed by their host message.
    pub game_manager: Arc<RwLock<GameManager>>,
    /// Per-user cooldown gate consulted by every command.
    pub cooldowns: CooldownTracker,
    /// Reused HTTP client for the informational commands.
    pub http: reqwest::Client,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            game_manager: Arc::new(RwLock::new(GameManager::new())),
            cooldowns: CooldownTracker::new(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
