use config::{Config, ConfigError, Environment, File};
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::time::Duration;

use crate::entity::{BotError, WatchEntry};
use crate::interactor::alert_interactor::DEFAULT_ALERT_THRESHOLD;

/// Settings file looked up when none is given on the command line (any format `config` supports)
pub const DEFAULT_SETTINGS_FILE: &str = "monitor";

/// Telegram credentials, read from the environment only
#[derive(Debug, Clone, Default)]
pub struct TelegramSettings {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramSettings {
    pub fn from_env() -> Self {
        Self {
            bot_token: non_empty_env("TG_BOT_TOKEN"),
            chat_id: non_empty_env("TG_CHAT_ID"),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Percent move since the last alert that triggers a new one
    pub alert_threshold: f64,

    /// Where the history snapshot lives
    pub history_file: String,

    /// Pause between watch entries during a monitor cycle
    pub request_delay_ms: u64,

    #[serde(default = "default_watchlist")]
    pub watchlist: Vec<WatchEntry>,

    #[serde(skip)]
    pub telegram: TelegramSettings,
}

impl AppSettings {
    /// Loads defaults, then the settings file, then `MONITOR_*` environment overrides.
    ///
    /// An explicitly given file must exist, the default one is optional.
    pub fn load(path: Option<&str>) -> Result<Self, BotError> {
        let file = path.unwrap_or(DEFAULT_SETTINGS_FILE);

        let mut settings: AppSettings = Self::build(file, path.is_some())
            .and_then(|config| config.try_deserialize::<AppSettings>())
            .map_err(|e| BotError::InvalidConfig(e.to_string()))?;

        settings.telegram = TelegramSettings::from_env();
        settings.validate()?;

        info!(
            "Loaded settings: {} watch entries, alert threshold {}%",
            settings.watchlist.len(),
            settings.alert_threshold
        );

        Ok(settings)
    }

    fn build(file: &str, required: bool) -> Result<Config, ConfigError> {
        Config::builder()
            .set_default("alert_threshold", DEFAULT_ALERT_THRESHOLD)?
            .set_default("history_file", "history.json")?
            .set_default("request_delay_ms", 1000)?
            .add_source(File::with_name(file).required(required))
            .add_source(Environment::with_prefix("MONITOR").try_parsing(true))
            .build()
    }

    pub fn validate(&self) -> Result<(), BotError> {
        if !self.alert_threshold.is_finite() || self.alert_threshold <= 0.0 {
            return Err(BotError::InvalidConfig(format!(
                "alert_threshold must be a positive number, got {}",
                self.alert_threshold
            )));
        }

        let mut names = HashSet::new();
        for entry in &self.watchlist {
            if entry.name.trim().is_empty() {
                return Err(BotError::InvalidConfig(
                    "watch entry with an empty name".to_string(),
                ));
            }
            if entry.chain.trim().is_empty() || entry.address.trim().is_empty() {
                return Err(BotError::InvalidConfig(format!(
                    "watch entry {} needs both chain and address",
                    entry.name
                )));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(BotError::InvalidConfig(format!(
                    "duplicate watch entry name {}",
                    entry.name
                )));
            }
        }

        Ok(())
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn bot_token(&self) -> Result<&str, BotError> {
        self.telegram
            .bot_token
            .as_deref()
            .ok_or(BotError::ConfigurationMissing("TG_BOT_TOKEN"))
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn default_watchlist() -> Vec<WatchEntry> {
    vec![
        WatchEntry::new("LAF", "bsc", "0x3bec20ca77e100c50ef0d0066f4c2b348e615f48"),
        WatchEntry::new("RAIL", "ethereum", "0xe76c6c83af64e4c60245d8c7de953df673a7a33d"),
        WatchEntry::new("SOSD", "solana", "9BJWrL5cP3AXSq42d2QxB71ywmadyTgYJFJoWFbaDp6Z"),
    ]
}
