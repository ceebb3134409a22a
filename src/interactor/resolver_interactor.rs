use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::dexscreener::QuoteSource;
use crate::entity::PairRecord;

/// Turns an ambiguous address (token contract or pool) into a single trading pair
#[async_trait]
pub trait PairResolver: Send + Sync {
    /// Returns `None` when no strategy finds a matching pair
    async fn resolve(&self, address: &str, chain_hint: Option<&str>) -> Option<PairRecord>;
}

pub struct PairResolverImpl {
    quote_source: Arc<dyn QuoteSource + Send + Sync>,
}

impl PairResolverImpl {
    pub fn new(quote_source: Arc<dyn QuoteSource + Send + Sync>) -> Self {
        Self { quote_source }
    }
}

#[async_trait]
impl PairResolver for PairResolverImpl {
    async fn resolve(&self, address: &str, chain_hint: Option<&str>) -> Option<PairRecord> {
        let chain = normalize_chain_hint(chain_hint);
        let chain = chain.as_deref();

        // 1. A pool address maps to exactly one pair, so the first result is authoritative
        if let Some(chain) = chain {
            let candidates = self.quote_source.fetch_by_pair_address(chain, address).await;
            if let Some(pair) = candidates.into_iter().find(PairRecord::has_price) {
                info!("Resolved {} as a {} pool", address, chain);
                return Some(pair);
            }
        }

        // 2. Token contract: the most liquid pair is the best proxy for the real market
        let candidates = self.quote_source.fetch_by_token_address(address).await;
        if let Some(pair) = most_liquid(candidates, chain) {
            info!(
                "Resolved {} as a token, pair {} on {}",
                address, pair.pair_address, pair.chain_id
            );
            return Some(pair);
        }

        // 3. Search is noisy, never trusted outside the hinted chain
        let candidates = self.quote_source.search(address).await;
        if let Some(pair) = most_liquid(candidates, chain) {
            info!(
                "Resolved {} through search, pair {} on {}",
                address, pair.pair_address, pair.chain_id
            );
            return Some(pair);
        }

        debug!("No pair found for {} (chain: {:?})", address, chain);
        None
    }
}

/// Lowercased, trimmed chain id. Blank hints count as no hint.
pub fn normalize_chain_hint(chain_hint: Option<&str>) -> Option<String> {
    chain_hint
        .map(|chain| chain.trim().to_lowercase())
        .filter(|chain| !chain.is_empty())
}

/// Highest-liquidity priced candidate on `chain` (or any chain), first occurrence wins ties
pub fn most_liquid(candidates: Vec<PairRecord>, chain: Option<&str>) -> Option<PairRecord> {
    candidates
        .into_iter()
        .filter(|pair| pair.has_price())
        .filter(|pair| chain.map_or(true, |chain| pair.is_on_chain(chain)))
        .fold(None, |best: Option<PairRecord>, candidate| match best {
            Some(current) if current.liquidity() >= candidate.liquidity() => Some(current),
            _ => Some(candidate),
        })
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Resolver answering from a fixed address -> pair table
    #[derive(Default)]
    pub struct MockResolver {
        pairs: Mutex<HashMap<String, PairRecord>>,
        chain_hints: Mutex<Vec<Option<String>>>,
    }

    impl MockResolver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_pair(&self, address: &str, pair: PairRecord) {
            self.pairs.lock().unwrap().insert(address.to_string(), pair);
        }

        pub fn set_price(&self, address: &str, price_usd: f64) {
            let mut pairs = self.pairs.lock().unwrap();
            if let Some(pair) = pairs.get_mut(address) {
                pair.price_usd = price_usd;
            }
        }

        pub fn call_count(&self) -> usize {
            self.chain_hints.lock().unwrap().len()
        }

        /// Chain hint of every call, in call order
        pub fn chain_hints(&self) -> Vec<Option<String>> {
            self.chain_hints.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PairResolver for MockResolver {
        async fn resolve(&self, address: &str, chain_hint: Option<&str>) -> Option<PairRecord> {
            self.chain_hints
                .lock()
                .unwrap()
                .push(chain_hint.map(str::to_string));
            self.pairs.lock().unwrap().get(address).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dexscreener::quote_source::mock::{pair, MockQuoteSource};

    fn resolver(source: &Arc<MockQuoteSource>) -> PairResolverImpl {
        PairResolverImpl::new(source.clone())
    }

    #[tokio::test]
    async fn test_pair_lookup_short_circuits() {
        let source = Arc::new(
            MockQuoteSource::new()
                .with_pair_results(vec![
                    pair("bsc", "pool-a", Some(10.0)),
                    pair("bsc", "pool-b", Some(99.0)),
                ])
                .with_token_results(vec![pair("bsc", "token-pool", Some(1e9))]),
        );

        let resolved = resolver(&source).resolve("addr", Some("bsc")).await.unwrap();

        assert_eq!(resolved.pair_address, "pool-a");
        assert_eq!(source.calls(), vec!["pair"]);
    }

    #[tokio::test]
    async fn test_no_hint_skips_pair_lookup() {
        let source = Arc::new(
            MockQuoteSource::new()
                .with_pair_results(vec![pair("bsc", "pool-a", None)])
                .with_token_results(vec![pair("ethereum", "eth-pool", Some(5.0))]),
        );

        let resolved = resolver(&source).resolve("addr", None).await.unwrap();

        assert_eq!(resolved.pair_address, "eth-pool");
        assert_eq!(source.calls(), vec!["token"]);
    }

    #[tokio::test]
    async fn test_token_lookup_filters_chain_and_maximizes_liquidity() {
        let source = Arc::new(MockQuoteSource::new().with_token_results(vec![
            pair("ethereum", "eth-big", Some(9_000_000.0)),
            pair("bsc", "bsc-small", Some(1_000.0)),
            pair("bsc", "bsc-big", Some(50_000.0)),
            pair("bsc", "bsc-none", None),
        ]));

        let resolved = resolver(&source).resolve("addr", Some("BSC")).await.unwrap();

        assert_eq!(resolved.chain_id, "bsc");
        assert_eq!(resolved.pair_address, "bsc-big");
        assert_eq!(source.calls(), vec!["pair", "token"]);
    }

    #[tokio::test]
    async fn test_liquidity_tie_keeps_first_occurrence() {
        let source = Arc::new(MockQuoteSource::new().with_token_results(vec![
            pair("solana", "first", Some(100.0)),
            pair("solana", "second", Some(100.0)),
            pair("solana", "third", Some(20.0)),
        ]));

        let resolved = resolver(&source).resolve("addr", None).await.unwrap();

        assert_eq!(resolved.pair_address, "first");
    }

    #[tokio::test]
    async fn test_search_fallback() {
        let source = Arc::new(MockQuoteSource::new().with_search_results(vec![
            pair("base", "loose", Some(1.0)),
            pair("base", "best", Some(3.0)),
        ]));

        let resolved = resolver(&source).resolve("addr", None).await.unwrap();

        assert_eq!(resolved.pair_address, "best");
        assert_eq!(source.calls(), vec!["token", "search"]);
    }

    #[tokio::test]
    async fn test_chain_hint_is_strict() {
        let source = Arc::new(
            MockQuoteSource::new()
                .with_token_results(vec![pair("ethereum", "eth-pool", Some(10.0))])
                .with_search_results(vec![pair("base", "base-pool", Some(10.0))]),
        );

        let resolved = resolver(&source).resolve("addr", Some("bsc")).await;

        assert!(resolved.is_none());
        assert_eq!(source.calls(), vec!["pair", "token", "search"]);
    }

    #[tokio::test]
    async fn test_not_found() {
        let source = Arc::new(MockQuoteSource::new());

        assert!(resolver(&source).resolve("addr", None).await.is_none());
    }

    #[tokio::test]
    async fn test_unpriced_candidates_are_skipped() {
        let mut unpriced_pool = pair("bsc", "unpriced-pool", Some(10.0));
        unpriced_pool.price_usd = 0.0;
        let mut unpriced_big = pair("bsc", "unpriced-big", Some(1_000_000.0));
        unpriced_big.price_usd = 0.0;

        let source = Arc::new(
            MockQuoteSource::new()
                .with_pair_results(vec![unpriced_pool])
                .with_token_results(vec![unpriced_big, pair("bsc", "priced", Some(5_000.0))]),
        );

        let resolved = resolver(&source).resolve("addr", Some("bsc")).await.unwrap();

        assert_eq!(resolved.pair_address, "priced");
        assert_eq!(source.calls(), vec!["pair", "token"]);
    }

    #[tokio::test]
    async fn test_null_price_from_api_is_not_resolved() {
        let json = r#"{"pairs": [{"chainId": "bsc", "pairAddress": "pool", "priceUsd": null, "liquidity": {"usd": 5000}}]}"#;
        let records = serde_json::from_str::<crate::dexscreener::DexPairsResponse>(json)
            .unwrap()
            .into_records();
        let source = Arc::new(MockQuoteSource::new().with_token_results(records));

        assert!(resolver(&source).resolve("addr", None).await.is_none());
    }

    #[test]
    fn test_blank_chain_hint_is_ignored() {
        assert_eq!(normalize_chain_hint(Some("  ")), None);
        assert_eq!(normalize_chain_hint(Some(" Solana ")), Some("solana".to_string()));
        assert_eq!(normalize_chain_hint(None), None);
    }
}
