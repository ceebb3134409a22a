// src/dexscreener/models.rs
use serde::Deserialize;

use crate::entity::PairRecord;

// Deserializes numbers that DexScreener sends either as JSON numbers or as strings
pub mod opt_string_or_float {
    use serde::{self, Deserializer};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptStringOrFloat;

        impl<'de> serde::de::Visitor<'de> for OptStringOrFloat {
            type Value = Option<f64>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, a float or a string containing a float")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(None)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(None)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if value.trim().is_empty() {
                    return Ok(None);
                }
                value
                    .trim()
                    .parse::<f64>()
                    .map(|parsed| Some(parsed).filter(|v| v.is_finite()))
                    .map_err(serde::de::Error::custom)
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&value)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Some(value).filter(|v| v.is_finite()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Some(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Some(value as f64))
            }
        }

        deserializer.deserialize_any(OptStringOrFloat)
    }
}

/// Envelope returned by the pairs, tokens and search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct DexPairsResponse {
    #[serde(default)]
    pub pairs: Option<Vec<DexPair>>,
    // Older pair lookups answer with a single object
    #[serde(default)]
    pub pair: Option<DexPair>,
}

impl DexPairsResponse {
    pub fn into_records(self) -> Vec<PairRecord> {
        let mut pairs = self.pairs.unwrap_or_default();
        if pairs.is_empty() {
            pairs.extend(self.pair);
        }
        pairs.into_iter().map(PairRecord::from).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub dex_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pair_address: String,
    #[serde(default)]
    pub base_token: DexToken,
    #[serde(default)]
    pub quote_token: Option<DexToken>,
    #[serde(default, deserialize_with = "opt_string_or_float::deserialize")]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub price_change: Option<DexPriceChange>,
    #[serde(default)]
    pub liquidity: Option<DexLiquidity>,
    #[serde(default, deserialize_with = "opt_string_or_float::deserialize")]
    pub fdv: Option<f64>,
    #[serde(default, deserialize_with = "opt_string_or_float::deserialize")]
    pub market_cap: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DexToken {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DexPriceChange {
    #[serde(default, deserialize_with = "opt_string_or_float::deserialize")]
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DexLiquidity {
    #[serde(default, deserialize_with = "opt_string_or_float::deserialize")]
    pub usd: Option<f64>,
}

impl From<DexPair> for PairRecord {
    fn from(pair: DexPair) -> Self {
        Self {
            chain_id: pair.chain_id.to_lowercase(),
            pair_address: pair.pair_address,
            dex_id: pair.dex_id,
            base_symbol: pair.base_token.symbol,
            base_name: pair.base_token.name,
            quote_symbol: pair.quote_token.map(|token| token.symbol),
            price_usd: pair.price_usd.unwrap_or(0.0).max(0.0),
            market_cap: pair.market_cap.or(pair.fdv),
            price_change_h24: pair.price_change.and_then(|change| change.h24),
            liquidity_usd: pair.liquidity.and_then(|liquidity| liquidity.usd),
            url: pair.url,
        }
    }
}
