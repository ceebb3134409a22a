// src/commands/help.rs
use super::{BotCommands, CommandHandler, USAGE_TEXT};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode, utils::command::BotCommands as _};

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(bot: Bot, msg: Message, _services: Arc<ServiceContainer>) -> Result<()> {
        let text = format!(
            "{}\n\n{}",
            teloxide::utils::html::escape(&BotCommands::descriptions().to_string()),
            USAGE_TEXT
        );

        bot.send_message(msg.chat.id, text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }
}
