//! Interactive layer of the guess-a-number game: four buttons driving the
//! pure `GuessState`, plus the renders for every phase of the game.

use super::state::{Feedback, GuessState, GuessStatus};
use crate::commands::games::engine::{Game, GameUpdate};
use crate::constants::{COLOR_BLURPLE, COLOR_GREEN, COLOR_RED};
use crate::interactions::ids;
use serenity::async_trait;
use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed};
use serenity::model::application::{ButtonStyle, ComponentInteraction};
use serenity::model::id::UserId;
use serenity::prelude::Context;
use std::any::Any;
use std::time::Instant;

pub struct GuessGame {
    pub state: GuessState,
    /// The user who started the game; congratulated on a win.
    pub owner: UserId,
    /// Updated on every state-changing click; the timeout task measures
    /// inactivity from here.
    pub last_activity: Instant,
    /// The most recent submitted guess and its feedback, kept so re-renders
    /// show the hint instead of the plain prompt.
    last_submit: Option<(i64, Feedback)>,
}

impl GuessGame {
    pub fn new(state: GuessState, owner: UserId) -> Self {
        Self {
            state,
            owner,
            last_activity: Instant::now(),
            last_submit: None,
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    fn result_line(&self, guess: i64, feedback: Feedback) -> String {
        match feedback {
            Feedback::Correct => format!(
                "🎉 **Congratulations <@{}>!**\nYou guessed the number **{}** in {} attempts! 🎯",
                self.owner, self.state.target, self.state.attempts
            ),
            Feedback::TooLow { coarse } => {
                let hint = if coarse { "🔼" } else { "↗️" };
                format!(
                    "**{}** is too low! {} (Attempt #{})",
                    guess, hint, self.state.attempts
                )
            }
            Feedback::TooHigh { coarse } => {
                let hint = if coarse { "🔽" } else { "↘️" };
                format!(
                    "**{}** is too high! {} (Attempt #{})",
                    guess, hint, self.state.attempts
                )
            }
        }
    }

    fn content(&self) -> String {
        match self.state.status {
            GuessStatus::Won => match self.last_submit {
                Some((guess, feedback)) => self.result_line(guess, feedback),
                None => String::new(),
            },
            GuessStatus::Cancelled => {
                format!("🚫 Game cancelled. The number was **{}**.", self.state.target)
            }
            GuessStatus::TimedOut => {
                format!("⏰ Game timed out. The number was **{}**.", self.state.target)
            }
            GuessStatus::InProgress => match self.last_submit {
                Some((guess, feedback)) => self.result_line(guess, feedback),
                None => format!("🔢 Guess a number between 1 and {}!", self.state.max_value),
            },
        }
    }
}

#[async_trait]
impl Game for GuessGame {
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
        // Every branch below only reads or mutates in-memory state, so the
        // click can be acknowledged up front.
        interaction.defer(&ctx.http).await.ok();

        match interaction.data.custom_id.as_str() {
            ids::GUESS_INCREASE => {
                if self.state.increase() {
                    self.touch();
                    GameUpdate::ReRender
                } else {
                    GameUpdate::NoOp
                }
            }
            ids::GUESS_DECREASE => {
                if self.state.decrease() {
                    self.touch();
                    GameUpdate::ReRender
                } else {
                    GameUpdate::NoOp
                }
            }
            ids::GUESS_SUBMIT => {
                let guess = self.state.current_guess;
                match self.state.submit() {
                    None => GameUpdate::NoOp,
                    Some(feedback) => {
                        self.last_submit = Some((guess, feedback));
                        self.touch();
                        if feedback == Feedback::Correct {
                            GameUpdate::GameOver {
                                message: format!(
                                    "<@{}> won in {} attempts",
                                    self.owner, self.state.attempts
                                ),
                            }
                        } else {
                            GameUpdate::ReRender
                        }
                    }
                }
            }
            ids::GUESS_CANCEL => {
                if self.state.status.is_terminal() {
                    GameUpdate::NoOp
                } else {
                    self.state.cancel();
                    GameUpdate::GameOver {
                        message: "game cancelled".to_string(),
                    }
                }
            }
            _ => GameUpdate::NoOp,
        }
    }

    fn render(&self) -> (String, CreateEmbed, Vec<CreateActionRow>) {
        let content = self.content();
        let embed = CreateEmbed::new()
            .title("🔢 Guess the Number")
            .description(match self.state.status {
                GuessStatus::InProgress => format!(
                    "**Current guess:** `{}`\n*Range: 1 - {}*",
                    self.state.current_guess, self.state.max_value
                ),
                _ => format!("Attempts: {}", self.state.attempts),
            })
            .color(match self.state.status {
                GuessStatus::InProgress => COLOR_BLURPLE,
                GuessStatus::Won => COLOR_GREEN,
                GuessStatus::Cancelled | GuessStatus::TimedOut => COLOR_RED,
            });

        let terminal = self.state.status.is_terminal();
        let components = vec![
            CreateActionRow::Buttons(vec![
                CreateButton::new(ids::GUESS_INCREASE)
                    .label("⬆️ Increase")
                    .style(ButtonStyle::Primary)
                    .disabled(terminal || !self.state.can_increase()),
                CreateButton::new(ids::GUESS_DECREASE)
                    .label("⬇️ Decrease")
                    .style(ButtonStyle::Primary)
                    .disabled(terminal || !self.state.can_decrease()),
            ]),
            CreateActionRow::Buttons(vec![
                CreateButton::new(ids::GUESS_SUBMIT)
                    .label("🎯 Submit Guess")
                    .style(ButtonStyle::Success)
                    .disabled(terminal),
                CreateButton::new(ids::GUESS_CANCEL)
                    .label("❌ Cancel")
                    .style(ButtonStyle::Danger)
                    .disabled(terminal),
            ]),
        ];

        (content, embed, components)
    }
}
