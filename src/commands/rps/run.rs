//! Entry point for the `/rps` slash command.

use super::game::RpsGame;
use super::state::RpsState;
use crate::AppState;
use crate::commands::games::Game;
use crate::cooldown;
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("rps").description("Play Rock-Paper-Scissors with the bot!")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    let game = RpsGame::new(RpsState::new(interaction.user.id));
    let (content, embed, components) = game.render();
    let builder = CreateInteractionResponseMessage::new()
        .content(content)
        .embed(embed)
        .components(components);
    let response = CreateInteractionResponse::Message(builder);
    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!(target: "rps", error = ?e, "failed to send initial game message");
        return;
    }

    let game_msg = match interaction.get_response(&ctx.http).await {
        Ok(msg) => msg,
        Err(e) => {
            tracing::error!(target: "rps", error = ?e, "failed to fetch interaction response");
            return;
        }
    };

    app_state
        .game_manager
        .write()
        .await
        .start_game(game_msg.id, Box::new(game));
}
