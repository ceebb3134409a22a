use serde::{Deserialize, Serialize};

/// A single trading pair as reported by the quote source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    pub chain_id: String,
    pub pair_address: String,
    pub dex_id: String,
    pub base_symbol: String,
    pub base_name: Option<String>,
    pub quote_symbol: Option<String>,
    pub price_usd: f64, // Zero when the source omits it, see `has_price`
    pub market_cap: Option<f64>,      // Market cap, or FDV when the cap is unknown
    pub price_change_h24: Option<f64>, // Percent
    pub liquidity_usd: Option<f64>,
    pub url: Option<String>,
}

impl PairRecord {
    /// Liquidity used for ranking, absent liquidity counts as zero
    pub fn liquidity(&self) -> f64 {
        self.liquidity_usd.unwrap_or(0.0)
    }

    /// False when the source reported no usable USD price
    pub fn has_price(&self) -> bool {
        self.price_usd.is_finite() && self.price_usd > 0.0
    }

    pub fn is_on_chain(&self, chain: &str) -> bool {
        self.chain_id.eq_ignore_ascii_case(chain)
    }

    /// Link to the pair page, falling back to a DexScreener URL built from the pair address
    pub fn page_url(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "https://dexscreener.com/{}/{}",
                self.chain_id, self.pair_address
            ),
        }
    }
}
