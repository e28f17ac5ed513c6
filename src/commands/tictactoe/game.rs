//! The interactive layer of Tic-Tac-Toe: binds the pure board state machine
//! to the `Game` trait, a 3×3 button grid, and per-click validation.

use super::state::{BoardState, BoardStatus, Mark, MoveError};
use crate::commands::games::engine::{Game, GameUpdate};
use crate::constants::{COLOR_BLURPLE, COLOR_GREEN};
use crate::interactions::ids;
use serenity::async_trait;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{ButtonStyle, ComponentInteraction};
use serenity::model::user::User;
use serenity::prelude::Context;
use std::any::Any;
use std::sync::Arc;

pub struct TicTacToeGame {
    pub state: BoardState,
    pub users: [Arc<User>; 2],
}

impl TicTacToeGame {
    pub fn new(player_x: Arc<User>, player_o: Arc<User>) -> Self {
        Self {
            state: BoardState::new(player_x.id, player_o.id),
            users: [player_x, player_o],
        }
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
            tracing::debug!(target: "ttt", error = ?e, "failed to send ephemeral response");
        }
    }

    fn winner_id(&self, mark: Mark) -> serenity::model::id::UserId {
        match mark {
            Mark::X => self.state.players[0],
            Mark::O => self.state.players[1],
        }
    }

    fn header_content(&self) -> String {
        match self.state.status {
            BoardStatus::Won(mark) => {
                format!("🎉 <@{}> wins! ({})", self.winner_id(mark), mark.emoji())
            }
            BoardStatus::Draw => "🤝 It's a draw! No one wins.".to_string(),
            BoardStatus::InProgress => format!(
                "<@{}>'s turn ({})",
                self.state.current_player(),
                self.state.current_mark().emoji()
            ),
        }
    }
}

#[async_trait]
impl Game for TicTacToeGame {
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
        let Some((x, y)) = ids::parse_cell_id(&interaction.data.custom_id) else {
            return GameUpdate::NoOp;
        };

        match self.state.apply_move(interaction.user.id, x, y) {
            Ok(status) => {
                interaction.defer(&ctx.http).await.ok();
                if status.is_terminal() {
                    GameUpdate::GameOver {
                        message: self.header_content(),
                    }
                } else {
                    GameUpdate::ReRender
                }
            }
            Err(MoveError::NotYourTurn) => {
                self.send_ephemeral_response(ctx, interaction, "It's not your turn!")
                    .await;
                GameUpdate::NoOp
            }
            // An occupied cell is silently ignored; just acknowledge the click.
            Err(MoveError::CellOccupied) | Err(MoveError::GameOver) => {
                interaction.defer(&ctx.http).await.ok();
                GameUpdate::NoOp
            }
        }
    }

    fn render(&self) -> (String, CreateEmbed, Vec<CreateActionRow>) {
        let content = self.header_content();
        let embed = CreateEmbed::new()
            .title("Tic-Tac-Toe")
            .description(format!(
                "{} (❌) vs {} (⭕)",
                self.users[0].name, self.users[1].name
            ))
            .color(if self.state.status.is_terminal() {
                COLOR_GREEN
            } else {
                COLOR_BLURPLE
            });

        let terminal = self.state.status.is_terminal();
        let components = (0..3)
            .map(|y| {
                let row = (0..3)
                    .map(|x| {
                        let cell = self.state.board[y][x];
                        CreateButton::new(ids::cell_id(x, y))
                            .label(cell.map_or("\u{200b}", Mark::emoji))
                            .style(ButtonStyle::Secondary)
                            .disabled(terminal || cell.is_some())
                    })
                    .collect();
                CreateActionRow::Buttons(row)
            })
            .collect();

        (content, embed, components)
    }
}
