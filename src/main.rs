//! DEX Pair Monitor - Main executable
//!
//! Runs either a single scheduled monitor cycle (`--cron`) that reports the
//! watched pairs and raises price alerts, or a long-polling Telegram bot that
//! answers address lookups.
use anyhow::Context;
use clap::Parser;
use dex_pair_monitor::commands::register_commands;
use dex_pair_monitor::{AppSettings, Cli, Router, RunMode, ServiceContainer, TelegramRouter};
use dotenv::dotenv;
use log::{error, info, warn};
use std::sync::Arc;
use teloxide::{prelude::*, types::BotCommand, Bot};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    info!("Starting DEX Pair Monitor v{}", dex_pair_monitor::VERSION);

    let settings = AppSettings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let services = Arc::new(
        ServiceContainer::new(settings).context("Failed to initialize services")?,
    );

    match cli.mode() {
        RunMode::Cron => run_cron(services).await,
        RunMode::Interactive => run_interactive(services).await,
    }
}

async fn run_cron(services: Arc<ServiceContainer>) -> anyhow::Result<()> {
    let report = services
        .monitor_service()
        .run_cycle()
        .await
        .context("Monitor cycle failed")?;

    if report.executed {
        info!(
            "Cycle done: {} reported, {} skipped, {} alerts",
            report.resolved, report.skipped, report.alerts
        );
    }

    Ok(())
}

async fn run_interactive(services: Arc<ServiceContainer>) -> anyhow::Result<()> {
    let bot_token = match services.settings().bot_token() {
        Ok(token) => token.to_string(),
        Err(e) => {
            error!("{}. Set TG_BOT_TOKEN to start the bot.", e);
            return Ok(());
        }
    };

    // Create Telegram bot instance
    let bot = Bot::new(bot_token);

    let commands: Vec<BotCommand> = register_commands()
        .into_iter()
        .map(|(name, description)| BotCommand::new(name, description))
        .collect();
    if let Err(e) = bot.set_my_commands(commands).await {
        warn!("Failed to register bot commands: {}", e);
    }

    let router = TelegramRouter::new(services);
    let handler = router.setup_handlers();

    // Build dispatcher with control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Send a token or pool address in Telegram.");
    dispatcher.dispatch().await;

    Ok(())
}
