use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Last known state of one watch entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Baseline for drift, only moves when an alert fires
    #[serde(alias = "last_alert_price")]
    pub last_alert_price: f64,
    #[serde(alias = "value", alias = "last_price")]
    pub last_price: f64,
}

/// Watch entry name -> history record, persisted as a whole
pub type HistorySnapshot = BTreeMap<String, HistoryRecord>;
