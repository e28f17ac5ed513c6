//! Handles all component interactions owned by the generic `GameManager`:
//! Tic-Tac-Toe cells, guess-number controls, and RPS choices.

use crate::AppState;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    let mut game_manager = app_state.game_manager.write().await;
    game_manager.on_interaction(ctx, component).await;
}
