// src/dexscreener/mod.rs
pub mod config;
pub mod models;
pub mod quote_source;

pub use config::Config;
pub use models::{DexPair, DexPairsResponse};
pub use quote_source::{DexScreenerQuoteSource, QuoteSource};
