//! The shared game engine: the `Game` trait every interactive game
//! implements, and the `GameManager` that tracks active games by message ID
//! and routes button presses to the owning instance.

use serenity::async_trait;
use serenity::builder::{CreateActionRow, CreateEmbed, EditMessage};
use serenity::model::application::ComponentInteraction;
use serenity::model::id::MessageId;
use serenity::prelude::Context;
use std::any::Any;
use std::collections::HashMap;

/// What the engine should do after a game processed an interaction.
pub enum GameUpdate {
    /// State changed; re-render the game message.
    ReRender,
    /// The game reached a terminal state. The final render (with its controls
    /// disabled) replaces the message and the instance is dropped.
    GameOver { message: String },
    /// Nothing changed (wrong user, occupied cell, already terminal, ...).
    NoOp,
}

#[async_trait]
pub trait Game: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    async fn handle_interaction(
        &mut self,
        ctx: &Context,
        interaction: &mut ComponentInteraction,
    ) -> GameUpdate;
    /// Produces the message content, embed, and button rows for the current
    /// state. Terminal states must render their controls disabled.
    fn render(&self) -> (String, CreateEmbed, Vec<CreateActionRow>);
}

/// Registry of live games, keyed by the message that hosts each one.
/// An entry exists exactly while its game is in progress; terminal
/// transitions and timeouts remove it.
pub struct GameManager {
    active_games: HashMap<MessageId, Box<dyn Game>>,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl GameManager {
    pub fn new() -> Self {
        Self {
            active_games: HashMap::new(),
        }
    }

    pub fn start_game(&mut self, message_id: MessageId, game: Box<dyn Game>) {
        self.active_games.insert(message_id, game);
    }

    pub fn get_game_mut(&mut self, message_id: &MessageId) -> Option<&mut Box<dyn Game>> {
        self.active_games.get_mut(message_id)
    }

    pub fn remove_game(&mut self, message_id: &MessageId) {
        self.active_games.remove(message_id);
    }

    pub async fn on_interaction(&mut self, ctx: &Context, interaction: &mut ComponentInteraction) {
        let Some(game) = self.get_game_mut(&interaction.message.id) else {
            // Stale button on a message whose game is already gone.
            return;
        };
        match game.handle_interaction(ctx, interaction).await {
            GameUpdate::ReRender => {
                let (content, embed, components) = game.render();
                let builder = EditMessage::new()
                    .content(content)
                    .embed(embed)
                    .components(components);
                if let Err(e) = interaction.message.edit(&ctx.http, builder).await {
                    tracing::error!(target: "games", error = ?e, "failed to edit game message");
                }
            }
            GameUpdate::GameOver { message } => {
                tracing::info!(target: "games", message_id = %interaction.message.id, "game over: {message}");
                let (content, embed, components) = game.render();
                let builder = EditMessage::new()
                    .content(content)
                    .embed(embed)
                    .components(components);
                if let Err(e) = interaction.message.edit(&ctx.http, builder).await {
                    tracing::error!(target: "games", error = ?e, "failed to edit final game message");
                }
                self.remove_game(&interaction.message.id);
            }
            GameUpdate::NoOp => {}
        }
    }
}
