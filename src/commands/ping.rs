use crate::AppState;
use crate::cooldown;
use crate::model::ShardManagerContainer;
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Check the bot's latency.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    let latency = {
        let data = ctx.data.read().await;
        match data.get::<ShardManagerContainer>() {
            Some(shard_manager) => {
                let runners = shard_manager.runners.lock().await;
                runners.get(&ctx.shard_id).and_then(|runner| runner.latency)
            }
            None => None,
        }
    };
    let response = latency.map_or_else(
        || "Pong! Heartbeat latency: `N/A`".to_string(),
        |latency| format!("Pong! Heartbeat latency: `{:.2} ms`", latency.as_secs_f64() * 1000.0),
    );

    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(response),
    );
    if let Err(e) = interaction.create_response(&ctx.http, builder).await {
        tracing::debug!(target: "ping", error = ?e, "failed to send ping response");
    }
}
