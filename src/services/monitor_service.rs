use crate::entity::{BotError, HistoryRecord, HistorySnapshot, WatchEntry};
use crate::interactor::alert_interactor::AlertEvaluator;
use crate::interactor::history_store::HistoryStore;
use crate::interactor::resolver_interactor::PairResolver;
use crate::view::notification_view::NotificationSink;
use crate::view::pair_message::{format_pair_message, ReportKind};
use chrono::Utc;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Summary of one monitor pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// False when the cycle was skipped because no notification channel is configured
    pub executed: bool,
    pub resolved: usize,
    pub skipped: usize,
    pub alerts: usize,
    pub delivery_failures: usize,
}

/// Runs the scheduled pass over the watch list.
///
/// Entries are processed one at a time in configured order, with a fixed pause
/// between them. Per entry the alert (if any) goes out before the routine report.
pub struct MonitorService {
    watchlist: Vec<WatchEntry>,
    resolver: Arc<dyn PairResolver + Send + Sync>,
    evaluator: AlertEvaluator,
    history_store: Arc<dyn HistoryStore + Send + Sync>,
    notifier: Option<Arc<dyn NotificationSink + Send + Sync>>,
    request_delay: Duration,
}

impl MonitorService {
    pub fn new(
        watchlist: Vec<WatchEntry>,
        resolver: Arc<dyn PairResolver + Send + Sync>,
        evaluator: AlertEvaluator,
        history_store: Arc<dyn HistoryStore + Send + Sync>,
        notifier: Option<Arc<dyn NotificationSink + Send + Sync>>,
        request_delay: Duration,
    ) -> Self {
        Self {
            watchlist,
            resolver,
            evaluator,
            history_store,
            notifier,
            request_delay,
        }
    }

    /// Runs one full pass and persists the resulting snapshot.
    ///
    /// Only a failure to persist the snapshot is returned as an error.
    pub async fn run_cycle(&self) -> Result<CycleReport, BotError> {
        let notifier = match &self.notifier {
            Some(notifier) => notifier.clone(),
            None => {
                warn!("No notification channel configured, skipping monitor cycle");
                return Ok(CycleReport::default());
            }
        };

        let history = self.history_store.load().await;
        let mut next_history = HistorySnapshot::new();
        let mut report = CycleReport {
            executed: true,
            ..CycleReport::default()
        };

        info!(
            "Starting monitor cycle for {} entries ({} with history, alert threshold {}%)",
            self.watchlist.len(),
            history.len(),
            self.evaluator.threshold_percent()
        );

        for (index, entry) in self.watchlist.iter().enumerate() {
            if index > 0 && !self.request_delay.is_zero() {
                sleep(self.request_delay).await;
            }

            let previous = history.get(&entry.name).copied();

            let resolved = self
                .resolver
                .resolve(&entry.address, Some(&entry.chain))
                .await
                .filter(|pair| pair.has_price());

            let pair = match resolved {
                Some(pair) => pair,
                None => {
                    warn!(
                        "Could not resolve a priced pair for {} ({} on {}), skipping",
                        entry.name, entry.address, entry.chain
                    );
                    report.skipped += 1;
                    // Keep the old baseline so one failed lookup does not reset it
                    if let Some(record) = previous {
                        next_history.insert(entry.name.clone(), record);
                    }
                    continue;
                }
            };

            let current_price = pair.price_usd;
            let evaluation = self
                .evaluator
                .evaluate(current_price, previous.map(|record| record.last_alert_price));

            debug!(
                "{}: price {} drift {:.2}% alert={}",
                entry.name, current_price, evaluation.diff_percent, evaluation.is_alert
            );

            let now = Utc::now();
            if evaluation.is_alert {
                info!(
                    "{} moved {:.2}% since last alert",
                    entry.name, evaluation.diff_percent
                );
                report.alerts += 1;
                let text = format_pair_message(
                    &pair,
                    ReportKind::Alert {
                        diff_percent: evaluation.diff_percent,
                    },
                    now,
                );
                if !Self::notify(&*notifier, &entry.name, &text).await {
                    report.delivery_failures += 1;
                }
            }

            let text = format_pair_message(&pair, ReportKind::Scheduled, now);
            if !Self::notify(&*notifier, &entry.name, &text).await {
                report.delivery_failures += 1;
            }

            next_history.insert(
                entry.name.clone(),
                HistoryRecord {
                    last_alert_price: evaluation.new_baseline,
                    last_price: current_price,
                },
            );
            report.resolved += 1;
        }

        self.history_store.save(&next_history).await?;

        info!(
            "Monitor cycle finished: {} resolved, {} skipped, {} alerts, {} failed deliveries",
            report.resolved, report.skipped, report.alerts, report.delivery_failures
        );

        Ok(report)
    }

    async fn notify(
        notifier: &(dyn NotificationSink + Send + Sync),
        name: &str,
        text: &str,
    ) -> bool {
        match notifier.deliver(text).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to deliver notification for {}: {}", name, e);
                false
            }
        }
    }
}
