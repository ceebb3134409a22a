use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::dexscreener::models::DexPairsResponse;
use crate::dexscreener::Config;
use crate::entity::{BotError, PairRecord};

/// Candidate lookups against the quote source.
///
/// Every operation is a single round trip. Failures of any kind are logged and
/// reported as an empty candidate list, callers decide what to try next.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Treat `address` as a liquidity pool on `chain`
    async fn fetch_by_pair_address(&self, chain: &str, address: &str) -> Vec<PairRecord>;

    /// Treat `address` as a token contract, returns its pairs on every chain
    async fn fetch_by_token_address(&self, address: &str) -> Vec<PairRecord>;

    /// Free-text search, lowest confidence
    async fn search(&self, address: &str) -> Vec<PairRecord>;
}

/// Quote source backed by the public DexScreener API
pub struct DexScreenerQuoteSource {
    http_client: Client,
    config: Config,
}

impl DexScreenerQuoteSource {
    pub fn new(config: Config) -> Result<Self, BotError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    async fn get_pairs(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<PairRecord>, BotError> {
        let response = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let body: DexPairsResponse = response.json().await?;

        Ok(body.into_records())
    }

    async fn fetch_or_empty(
        &self,
        strategy: &str,
        url: String,
        query: &[(&str, &str)],
    ) -> Vec<PairRecord> {
        match self.get_pairs(&url, query).await {
            Ok(pairs) => {
                debug!("DexScreener {} lookup returned {} pairs", strategy, pairs.len());
                pairs
            }
            Err(e) => {
                warn!("DexScreener {} lookup failed ({}): {}", strategy, url, e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl QuoteSource for DexScreenerQuoteSource {
    async fn fetch_by_pair_address(&self, chain: &str, address: &str) -> Vec<PairRecord> {
        let url = format!(
            "{}/latest/dex/pairs/{}/{}",
            self.config.api_url, chain, address
        );
        self.fetch_or_empty("pair", url, &[]).await
    }

    async fn fetch_by_token_address(&self, address: &str) -> Vec<PairRecord> {
        let url = format!("{}/latest/dex/tokens/{}", self.config.api_url, address);
        self.fetch_or_empty("token", url, &[]).await
    }

    async fn search(&self, address: &str) -> Vec<PairRecord> {
        let url = format!("{}/latest/dex/search", self.config.api_url);
        self.fetch_or_empty("search", url, &[("q", address)]).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unreachable_source_yields_no_candidates() {
        let config = Config {
            // Reserved TEST-NET address, the connection never succeeds
            api_url: "http://192.0.2.1:9".to_string(),
            timeout: Duration::from_millis(200),
            user_agent: "test".to_string(),
        };
        let source = DexScreenerQuoteSource::new(config).unwrap();

        assert!(source.fetch_by_pair_address("bsc", "0xabc").await.is_empty());
        assert!(source.fetch_by_token_address("0xabc").await.is_empty());
        assert!(source.search("0xabc").await.is_empty());
    }
}
