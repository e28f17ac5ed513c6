//! Entry point for the `/tictactoe` slash command: validates the opponent,
//! creates the game, and registers it with the `GameManager`.

use super::game::TicTacToeGame;
use crate::AppState;
use crate::commands::games::Game;
use crate::cooldown;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("tictactoe")
        .description("Play Tic-Tac-Toe with a friend.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "opponent", "User to play with")
                .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    let opponent_id = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "opponent")
        .and_then(|opt| opt.value.as_user_id());
    let Some(opponent_id) = opponent_id else {
        respond_plain(ctx, interaction, "You need to pick an opponent.").await;
        return;
    };
    let Ok(opponent) = opponent_id.to_user(&ctx.http).await else {
        respond_plain(ctx, interaction, "Failed to resolve that user.").await;
        return;
    };
    if opponent.bot {
        respond_plain(ctx, interaction, "You cannot play with a bot!").await;
        return;
    }
    if opponent.id == interaction.user.id {
        respond_plain(ctx, interaction, "You cannot challenge yourself.").await;
        return;
    }

    let game = TicTacToeGame::new(Arc::new(interaction.user.clone()), Arc::new(opponent));
    let (content, embed, components) = game.render();
    let builder = CreateInteractionResponseMessage::new()
        .content(content)
        .embed(embed)
        .components(components);
    let response = CreateInteractionResponse::Message(builder);
    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!(target: "ttt", error = ?e, "failed to send initial game message");
        return;
    }

    let game_msg = match interaction.get_response(&ctx.http).await {
        Ok(msg) => msg,
        Err(e) => {
            tracing::error!(target: "ttt", error = ?e, "failed to fetch interaction response");
            return;
        }
    };

    app_state
        .game_manager
        .write()
        .await
        .start_game(game_msg.id, Box::new(game));
}

async fn respond_plain(ctx: &Context, interaction: &CommandInteraction, content: &str) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(content),
    );
    if let Err(e) = interaction.create_response(&ctx.http, builder).await {
        tracing::debug!(target: "ttt", error = ?e, "failed to send response");
    }
}
