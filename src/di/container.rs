use std::sync::Arc;

use teloxide::Bot;

use crate::dexscreener::config::Config as DexScreenerConfig;
use crate::dexscreener::quote_source::{DexScreenerQuoteSource, QuoteSource};
use crate::entity::BotError;
use crate::interactor::alert_interactor::AlertEvaluator;
use crate::interactor::history_store::{HistoryStore, JsonHistoryStore};
use crate::interactor::resolver_interactor::{PairResolver, PairResolverImpl};
use crate::services::MonitorService;
use crate::settings::AppSettings;
use crate::view::notification_view::{NotificationSink, TelegramNotificationView};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    settings: AppSettings,

    // DexScreener services
    resolver: Arc<dyn PairResolver + Send + Sync>,

    history_store: Arc<dyn HistoryStore + Send + Sync>,
    evaluator: AlertEvaluator,
}

impl ServiceContainer {
    /// Create a new service container from loaded settings
    pub fn new(settings: AppSettings) -> Result<Self, BotError> {
        let dexscreener_config = DexScreenerConfig::from_env();

        let quote_source = Arc::new(DexScreenerQuoteSource::new(dexscreener_config)?)
            as Arc<dyn QuoteSource + Send + Sync>;

        let resolver = Arc::new(PairResolverImpl::new(quote_source))
            as Arc<dyn PairResolver + Send + Sync>;

        let history_store = Arc::new(JsonHistoryStore::new(&settings.history_file))
            as Arc<dyn HistoryStore + Send + Sync>;

        let evaluator = AlertEvaluator::new(settings.alert_threshold);

        Ok(Self {
            settings,
            resolver,
            history_store,
            evaluator,
        })
    }

    /// Monitor wired to the configured chat, without a chat the cycle is a no-op
    pub fn monitor_service(&self) -> MonitorService {
        let notifier = match (&self.settings.telegram.bot_token, &self.settings.telegram.chat_id) {
            (Some(token), Some(chat_id)) => Some(Arc::new(TelegramNotificationView::new(
                Bot::new(token),
                chat_id,
            )) as Arc<dyn NotificationSink + Send + Sync>),
            _ => None,
        };

        MonitorService::new(
            self.settings.watchlist.clone(),
            self.resolver.clone(),
            self.evaluator,
            self.history_store.clone(),
            notifier,
            self.settings.request_delay(),
        )
    }

    // Accessor methods

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn resolver(&self) -> Arc<dyn PairResolver + Send + Sync> {
        self.resolver.clone()
    }
}
