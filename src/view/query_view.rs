use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use teloxide::{prelude::*, types::MessageId, types::ParseMode, Bot};

use crate::entity::PairRecord;
use crate::view::disabled_link_preview;
use crate::view::pair_message::{
    format_loading_message, format_not_found_message, format_pair_message, ReportKind,
};

#[async_trait]
pub trait QueryView: Send + Sync {
    async fn display_loading(&self, chain_hint: Option<&str>) -> Result<Option<MessageId>>;
    async fn display_pair(&self, pair: &PairRecord, loading: Option<MessageId>) -> Result<()>;
    async fn display_not_found(&self, address: &str, loading: Option<MessageId>) -> Result<()>;
}

pub struct TelegramQueryView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramQueryView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    // Replace the loading message when there is one, otherwise send a new message
    async fn show(&self, text: String, loading: Option<MessageId>) -> Result<()> {
        if let Some(message_id) = loading {
            self.bot
                .edit_message_text(self.chat_id, message_id, text)
                .parse_mode(ParseMode::Html)
                .link_preview_options(disabled_link_preview())
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .parse_mode(ParseMode::Html)
                .link_preview_options(disabled_link_preview())
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl QueryView for TelegramQueryView {
    async fn display_loading(&self, chain_hint: Option<&str>) -> Result<Option<MessageId>> {
        let message = self
            .bot
            .send_message(self.chat_id, format_loading_message(chain_hint))
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(Some(message.id))
    }

    async fn display_pair(&self, pair: &PairRecord, loading: Option<MessageId>) -> Result<()> {
        let text = format_pair_message(pair, ReportKind::ManualQuery, Utc::now());
        self.show(text, loading).await
    }

    async fn display_not_found(&self, address: &str, loading: Option<MessageId>) -> Result<()> {
        self.show(format_not_found_message(address), loading).await
    }
}
