//! Interactive layer of Rock-Paper-Scissors: three buttons, one resolution,
//! then everything locks.

use super::state::{Choice, Outcome, RpsState};
use crate::commands::games::engine::{Game, GameUpdate};
use crate::constants::{COLOR_BLURPLE, COLOR_GREEN, COLOR_ORANGE, COLOR_RED};
use crate::interactions::ids;
use serenity::async_trait;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{ButtonStyle, ComponentInteraction};
use serenity::prelude::Context;
use std::any::Any;

pub struct RpsGame {
    pub state: RpsState,
}

impl RpsGame {
    pub fn new(state: RpsState) -> Self {
        Self { state }
    }

    async fn send_ephemeral_response(
        &self,
        ctx: &Context,
        interaction: &ComponentInteraction,
        content: &str,
    ) {
        let response = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true);
        let builder = CreateInteractionResponse::Message(response);
        if let Err(e) = interaction.create_response(&ctx.http, builder).await {
            tracing::debug!(target: "rps", error = ?e, "failed to send ephemeral response");
        }
    }
}

#[async_trait]
impl Game for RpsGame {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    async fn handle_interaction(
        &mut self,
        ctx: &Context,
        interaction: &mut ComponentInteraction,
    ) -> GameUpdate {
        if interaction.user.id != self.state.player {
            self.send_ephemeral_response(ctx, interaction, "This is not your game.")
                .await;
            return GameUpdate::NoOp;
        }
        let choice = interaction
            .data
            .custom_id
            .strip_prefix(ids::RPS_CHOICE_PREFIX)
            .and_then(Choice::from_key);
        let Some(choice) = choice else {
            return GameUpdate::NoOp;
        };

        interaction.defer(&ctx.http).await.ok();
        match self.state.play(choice) {
            Some((user_choice, bot_choice, outcome)) => GameUpdate::GameOver {
                message: format!("{user_choice} vs {bot_choice}: {outcome:?}"),
            },
            // Already resolved; the disabled buttons should prevent this.
            None => GameUpdate::NoOp,
        }
    }

    fn render(&self) -> (String, CreateEmbed, Vec<CreateActionRow>) {
        let (content, color) = match self.state.result {
            None => ("Choose your move:".to_string(), COLOR_BLURPLE),
            Some((user_choice, bot_choice, outcome)) => {
                let (verdict, color) = match outcome {
                    Outcome::Tie => ("It's a tie!", COLOR_ORANGE),
                    Outcome::Win => ("You won!", COLOR_GREEN),
                    Outcome::Lose => ("You have lost! Try again", COLOR_RED),
                };
                (
                    format!("Your choice: {user_choice}\nBot choice: {bot_choice}\n{verdict}"),
                    color,
                )
            }
        };

        let embed = CreateEmbed::new()
            .title("Rock Paper Scissors")
            .color(color);

        let resolved = self.state.is_resolved();
        let components = vec![CreateActionRow::Buttons(vec![
            CreateButton::new(format!("{}rock", ids::RPS_CHOICE_PREFIX))
                .label("Rock")
                .style(ButtonStyle::Primary)
                .disabled(resolved),
            CreateButton::new(format!("{}paper", ids::RPS_CHOICE_PREFIX))
                .label("Paper")
                .style(ButtonStyle::Success)
                .disabled(resolved),
            CreateButton::new(format!("{}scissors", ids::RPS_CHOICE_PREFIX))
                .label("Scissors")
                .style(ButtonStyle::Danger)
                .disabled(resolved),
        ])];

        (content, embed, components)
    }
}
