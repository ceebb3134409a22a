use async_trait::async_trait;
use log::debug;
use teloxide::{
    prelude::*,
    types::{ParseMode, Recipient},
    Bot,
};

use crate::entity::BotError;
use crate::view::disabled_link_preview;

/// Outbound channel for monitor notifications
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<(), BotError>;
}

/// Posts notifications to a fixed Telegram chat or channel
pub struct TelegramNotificationView {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotificationView {
    pub fn new(bot: Bot, chat: &str) -> Self {
        Self {
            bot,
            recipient: parse_recipient(chat),
        }
    }
}

/// Numeric ids address a chat directly, anything else is treated as a `@channel` name
pub fn parse_recipient(chat: &str) -> Recipient {
    let chat = chat.trim();
    match chat.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) if chat.starts_with('@') => Recipient::ChannelUsername(chat.to_string()),
        Err(_) => Recipient::ChannelUsername(format!("@{}", chat)),
    }
}

#[async_trait]
impl NotificationSink for TelegramNotificationView {
    async fn deliver(&self, text: &str) -> Result<(), BotError> {
        self.bot
            .send_message(self.recipient.clone(), text)
            .parse_mode(ParseMode::Html)
            .link_preview_options(disabled_link_preview())
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;

        debug!("Delivered notification to {:?}", self.recipient);
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Collects delivered texts, optionally failing every delivery
    #[derive(Default)]
    pub struct MockNotificationSink {
        delivered: Mutex<Vec<String>>,
        fail: bool,
    }

    impl MockNotificationSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                delivered: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn delivered(&self) -> Vec<String> {
            self.delivered.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NotificationSink for MockNotificationSink {
        async fn deliver(&self, text: &str) -> Result<(), BotError> {
            if self.fail {
                return Err(BotError::Delivery("chat not found".to_string()));
            }
            self.delivered.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
