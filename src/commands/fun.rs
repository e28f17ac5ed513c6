//! Static novelty commands: the magic 8-ball and the coin flip. No upstream
//! API involved; both just pass the cooldown gate and roll locally.

use crate::AppState;
use crate::constants::EIGHT_BALL_ANSWERS;
use crate::cooldown;
use rand::prelude::IndexedRandom;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

pub fn register_eightball() -> CreateCommand {
    CreateCommand::new("8ball")
        .description("Ask the magic 8ball a question!")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "question",
                "The question you want to ask",
            )
            .required(true),
        )
}

pub fn register_coinflip() -> CreateCommand {
    CreateCommand::new("coinflip").description("Flip a coin!")
}

pub async fn run_eightball(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    let question = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "question")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or("...");
    let answer = EIGHT_BALL_ANSWERS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("Ask again later ⏳");

    respond(ctx, interaction, format!("🎱 Question: {question}\nAnswer: {answer}")).await;
}

pub async fn run_coinflip(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    let result = if rand::random::<bool>() {
        "Heads 🪙"
    } else {
        "Tails 🪙"
    };
    respond(ctx, interaction, format!("And the winner is 🥁: {result}")).await;
}

async fn respond(ctx: &Context, interaction: &CommandInteraction, content: String) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(content),
    );
    if let Err(e) = interaction.create_response(&ctx.http, builder).await {
        tracing::debug!(target: "fun", error = ?e, "failed to send response");
    }
}
