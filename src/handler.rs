use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, mut interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!(target: "handler", "AppState missing from TypeMap");
            return;
        };

        if let Interaction::Command(command) = &mut interaction {
            match command.data.name.as_str() {
                "ping" => commands::ping::run_slash(&ctx, command).await,
                "8ball" => commands::fun::run_eightball(&ctx, command).await,
                "coinflip" => commands::fun::run_coinflip(&ctx, command).await,
                "dadjoke" => commands::jokes::run_dadjoke(&ctx, command).await,
                "fact" => commands::jokes::run_fact(&ctx, command).await,
                "rps" => commands::rps::run::run_slash(&ctx, command).await,
                "guessnumber" => commands::guess::run::run_slash(&ctx, command).await,
                "tictactoe" => commands::tictactoe::run::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &mut interaction {
            let command_family = component.data.custom_id.split('_').next().unwrap_or("");
            match command_family {
                "ttt" | "guess" | "rps" => {
                    interactions::game_handler::handle(&ctx, component, app_state).await
                }
                _ => {}
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target: "handler", "{} is connected and ready!", ready.user.name);
        let commands_to_register = vec![
            commands::ping::register(),
            commands::fun::register_eightball(),
            commands::fun::register_coinflip(),
            commands::jokes::register_dadjoke(),
            commands::jokes::register_fact(),
            commands::rps::run::register(),
            commands::guess::run::register(),
            commands::tictactoe::run::register(),
        ];
        if let Err(e) = self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            tracing::error!(target: "handler", error = ?e, "error creating guild commands");
            return;
        }
        tracing::info!(target: "handler", "successfully registered guild commands");
    }
}
