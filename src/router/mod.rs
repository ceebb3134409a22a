use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::commands::{self, BotCommands, CommandHandler};
use crate::di::ServiceContainer;

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

/// Text that is not a bot command
pub fn is_query_text(msg: &Message) -> bool {
    msg.text()
        .map(|text| !text.trim_start().starts_with('/'))
        .unwrap_or(false)
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;

        let services_for_start = self.services.clone();
        let services_for_help = self.services.clone();
        let services_for_query = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(case![BotCommands::Start].endpoint(move |bot: Bot, msg: Message| {
                let services = services_for_start.clone();
                async move { commands::start::StartCommand::execute(bot, msg, services).await }
            }))
            .branch(case![BotCommands::Help].endpoint(move |bot: Bot, msg: Message| {
                let services = services_for_help.clone();
                async move { commands::help::HelpCommand::execute(bot, msg, services).await }
            }));

        // Every other text message is treated as an address query
        let query_handler = dptree::filter(|msg: Message| is_query_text(&msg)).endpoint(
            move |bot: Bot, msg: Message| {
                let services = services_for_query.clone();
                async move { commands::query::receive_address_query(bot, msg, services).await }
            },
        );

        Update::filter_message()
            .branch(command_handler)
            .branch(query_handler)
    }
}
