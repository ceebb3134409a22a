use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::di::ServiceContainer;

pub mod help;
pub mod query;
pub mod start;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command
    async fn execute(bot: Bot, msg: Message, services: Arc<ServiceContainer>) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "start the bot")]
    Start,
    #[command(description = "display this help message")]
    Help,
}

/// How to ask for a pair, shared by /start and /help
pub const USAGE_TEXT: &str = "Send a token or pool address to look up its most liquid trading pair.\n\n\
Formats:\n\
• <code>&lt;address&gt;</code> searches every chain\n\
• <code>&lt;chain&gt; &lt;address&gt;</code> searches one chain, e.g. <code>bsc 0x...</code>\n\n\
New pools are often only found with the chain given.";
