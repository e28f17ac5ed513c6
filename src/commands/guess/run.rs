//! Entry point for the `/guessnumber` slash command. Starts the game,
//! registers it with the `GameManager`, and arms the inactivity timeout.

use super::game::GuessGame;
use super::state::GuessState;
use crate::AppState;
use crate::commands::games::Game;
use crate::constants::{GUESS_DEFAULT_MAX, GUESS_TIMEOUT_SECS};
use crate::cooldown;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use std::time::Duration;

pub fn register() -> CreateCommand {
    CreateCommand::new("guessnumber")
        .description("Guess a number between 1 and max using buttons.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "max_value",
                "Maximum number (default 100)",
            )
            .required(false)
            .min_int_value(2),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    let max_value = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "max_value")
        .and_then(|opt| opt.value.as_i64())
        .unwrap_or(GUESS_DEFAULT_MAX);

    let game = GuessGame::new(GuessState::with_random_target(max_value), interaction.user.id);
    let (content, embed, components) = game.render();
    let builder = CreateInteractionResponseMessage::new()
        .content(content)
        .embed(embed)
        .components(components);
    let response = CreateInteractionResponse::Message(builder);
    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!(target: "guess", error = ?e, "failed to send initial game message");
        return;
    }

    let game_msg = match interaction.get_response(&ctx.http).await {
        Ok(msg) => msg,
        Err(e) => {
            tracing::error!(target: "guess", error = ?e, "failed to fetch interaction response");
            return;
        }
    };

    let game_manager = app_state.game_manager.clone();
    game_manager
        .write()
        .await
        .start_game(game_msg.id, Box::new(game));

    // Inactivity watchdog. The deadline resets on every state-changing click,
    // so after each sleep we re-check how long the game has actually been
    // idle and re-arm for the remainder if it was touched in the meantime.
    let ctx_clone = ctx.clone();
    let mut game_msg = game_msg;
    tokio::spawn(async move {
        let timeout = Duration::from_secs(GUESS_TIMEOUT_SECS);
        let mut wait = timeout;
        loop {
            tokio::time::sleep(wait).await;

            let mut final_render = None;
            {
                let mut manager = game_manager.write().await;
                let Some(game_box) = manager.get_game_mut(&game_msg.id) else {
                    // Finished or cancelled while we slept.
                    return;
                };
                let Some(game) = game_box.as_any_mut().downcast_mut::<GuessGame>() else {
                    return;
                };
                let idle = game.last_activity.elapsed();
                if idle < timeout {
                    wait = timeout - idle;
                } else {
                    game.state.time_out();
                    final_render = Some(game.render());
                    manager.remove_game(&game_msg.id);
                }
            }

            if let Some((content, embed, components)) = final_render {
                tracing::info!(target: "guess", message_id = %game_msg.id, "game timed out");
                let builder = EditMessage::new()
                    .content(content)
                    .embed(embed)
                    .components(components);
                // Best effort: the message may have been deleted by now.
                if let Err(e) = game_msg.edit(&ctx_clone.http, builder).await {
                    tracing::debug!(target: "guess", error = ?e, "could not edit timed-out game message");
                }
                return;
            }
        }
    });
}
