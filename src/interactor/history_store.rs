use async_trait::async_trait;
use log::{info, warn};
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

use crate::entity::{BotError, HistorySnapshot};

/// Durable home of the history snapshot
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Missing or unreadable state yields an empty snapshot
    async fn load(&self) -> HistorySnapshot;

    /// Replaces the stored snapshot as a whole
    async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), BotError>;
}

/// Snapshot kept in a single JSON file
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_snapshot(&self) -> Result<HistorySnapshot, BotError> {
        let contents = fs::read_to_string(&self.path).await?;
        serde_json::from_str(&contents).map_err(|e| BotError::MalformedState(e.to_string()))
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "history.json".to_string());

        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

#[async_trait]
impl HistoryStore for JsonHistoryStore {
    async fn load(&self) -> HistorySnapshot {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            info!("No history at {}, starting fresh", self.path.display());
            return HistorySnapshot::new();
        }

        match self.read_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Ignoring history at {}: {}", self.path.display(), e);
                HistorySnapshot::new()
            }
        }
    }

    async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), BotError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| BotError::MalformedState(e.to_string()))?;

        // Write next to the target so the rename stays on one filesystem
        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, json).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        info!(
            "Saved history for {} entries to {}",
            snapshot.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// In-memory store that keeps every saved snapshot
    #[derive(Default)]
    pub struct MockHistoryStore {
        current: Mutex<HistorySnapshot>,
        saves: Mutex<Vec<HistorySnapshot>>,
    }

    impl MockHistoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_snapshot(snapshot: HistorySnapshot) -> Self {
            Self {
                current: Mutex::new(snapshot),
                saves: Mutex::new(Vec::new()),
            }
        }

        pub fn current(&self) -> HistorySnapshot {
            self.current.lock().unwrap().clone()
        }

        pub fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HistoryStore for MockHistoryStore {
        async fn load(&self) -> HistorySnapshot {
            self.current.lock().unwrap().clone()
        }

        async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), BotError> {
            *self.current.lock().unwrap() = snapshot.clone();
            self.saves.lock().unwrap().push(snapshot.clone());
            Ok(())
        }
    }
}
