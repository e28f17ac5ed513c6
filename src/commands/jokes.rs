//! Lookup commands backed by the shared JSON fetch helper: dad jokes and
//! random facts. Upstream failure is reported to the user and never fatal.

use crate::AppState;
use crate::constants::COLOR_ORANGE;
use crate::cooldown;
use crate::services::http::fetch_json;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

const DADJOKE_URL: &str = "https://icanhazdadjoke.com/";
const FACT_URL: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

pub fn register_dadjoke() -> CreateCommand {
    CreateCommand::new("dadjoke").description("Get a random dad joke!")
}

pub fn register_fact() -> CreateCommand {
    CreateCommand::new("fact").description("Get a random fun fact.")
}

pub async fn run_dadjoke(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    // icanhazdadjoke serves HTML unless asked for JSON explicitly.
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let joke = match fetch_json(&app_state.http, DADJOKE_URL, Some(headers), None).await {
        Ok(data) => data
            .get("joke")
            .and_then(|j| j.as_str())
            .map(str::to_string),
        Err(e) => {
            tracing::warn!(target: "jokes", error = %e, "dad joke fetch failed");
            None
        }
    };

    match joke {
        Some(joke) => {
            let embed = CreateEmbed::new()
                .title("😂 Dad Joke")
                .description(joke)
                .color(COLOR_ORANGE);
            respond_embed(ctx, interaction, embed).await;
        }
        None => respond_plain(ctx, interaction, "❌ Couldn't fetch a dad joke 😢").await,
    }
}

pub async fn run_fact(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !cooldown::gate_slash(ctx, interaction, &app_state.cooldowns).await {
        return;
    }

    let fact = match fetch_json(&app_state.http, FACT_URL, None, None).await {
        Ok(data) => data
            .get("text")
            .and_then(|t| t.as_str())
            .map(str::to_string),
        Err(e) => {
            tracing::warn!(target: "jokes", error = %e, "fun fact fetch failed");
            None
        }
    };

    match fact {
        Some(fact) => {
            let embed = CreateEmbed::new()
                .title("🧠 Fun Fact")
                .description(fact)
                .color(COLOR_ORANGE);
            respond_embed(ctx, interaction, embed).await;
        }
        None => respond_plain(ctx, interaction, "❌ Couldn't fetch a fun fact 😢").await,
    }
}

async fn respond_embed(ctx: &Context, interaction: &CommandInteraction, embed: CreateEmbed) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(embed),
    );
    if let Err(e) = interaction.create_response(&ctx.http, builder).await {
        tracing::debug!(target: "jokes", error = ?e, "failed to send response");
    }
}

async fn respond_plain(ctx: &Context, interaction: &CommandInteraction, content: &str) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(content),
    );
    if let Err(e) = interaction.create_response(&ctx.http, builder).await {
        tracing::debug!(target: "jokes", error = ?e, "failed to send response");
    }
}
