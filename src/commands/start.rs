use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode, utils::html};

use super::{CommandHandler, USAGE_TEXT};
use crate::di::ServiceContainer;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "start the bot"
    }

    async fn execute(bot: Bot, msg: Message, services: Arc<ServiceContainer>) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Start command received in chat {}", chat_id);

        let watched: Vec<String> = services
            .settings()
            .watchlist
            .iter()
            .map(|entry| format!("• {} ({})", html::escape(&entry.name), html::escape(&entry.chain)))
            .collect();

        let mut text = format!("<b>DEX Pair Monitor</b>\n\n{}", USAGE_TEXT);
        if !watched.is_empty() {
            text.push_str("\n\n<b>Scheduled reports cover:</b>\n");
            text.push_str(&watched.join("\n"));
        }

        bot.send_message(chat_id, text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }
}
