use chrono::{DateTime, Utc};
use teloxide::utils::html;

use crate::entity::PairRecord;
use crate::utils::{format_percent, format_price, format_timestamp, format_usd_compact};

/// Why a pair message is being sent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportKind {
    ManualQuery,
    Scheduled,
    Alert { diff_percent: f64 },
}

impl ReportKind {
    fn title(&self) -> String {
        match self {
            ReportKind::ManualQuery => "🔎 <b>Manual query</b>".to_string(),
            ReportKind::Scheduled => "⏰ <b>Scheduled report</b>".to_string(),
            ReportKind::Alert { diff_percent } => {
                format!("🚨 <b>Price alert ({})</b>", format_percent(*diff_percent))
            }
        }
    }
}

/// HTML message describing one trading pair
pub fn format_pair_message(pair: &PairRecord, kind: ReportKind, at: DateTime<Utc>) -> String {
    let quote = pair
        .quote_symbol
        .as_deref()
        .map(|symbol| format!("/{}", html::escape(symbol)))
        .unwrap_or_default();

    let name = pair
        .base_name
        .as_deref()
        .filter(|name| !name.is_empty() && *name != pair.base_symbol)
        .map(|name| format!(" ({})", html::escape(name)))
        .unwrap_or_default();

    let change = pair
        .price_change_h24
        .map(format_percent)
        .unwrap_or_else(|| "n/a".to_string());

    let market_cap = pair
        .market_cap
        .map(format_usd_compact)
        .unwrap_or_else(|| "n/a".to_string());

    let mut lines = vec![
        kind.title(),
        format!(
            "<b>{}</b>{}{} · {} · {}",
            html::escape(&pair.base_symbol),
            quote,
            name,
            html::escape(&pair.chain_id.to_uppercase()),
            html::escape(&pair.dex_id)
        ),
        format!("💰 Price: {}", format_price(pair.price_usd)),
        format!("📈 24h: {}", change),
        format!("💧 Liquidity: {}", format_usd_compact(pair.liquidity())),
        format!("🏦 Market cap: {}", market_cap),
    ];

    lines.push(format!(
        "🔗 <a href=\"{}\">DexScreener</a>",
        html::escape(&pair.page_url())
    ));
    lines.push(format!("<code>{}</code>", html::escape(&pair.pair_address)));
    lines.push(format!("🕒 {}", format_timestamp(at)));

    lines.join("\n")
}

pub fn format_loading_message(chain_hint: Option<&str>) -> String {
    let scope = chain_hint
        .map(|chain| html::escape(chain))
        .unwrap_or_else(|| "all chains".to_string());
    format!("⚡ Searching {}...", scope)
}

pub fn format_not_found_message(address: &str) -> String {
    format!(
        "❌ No pool found.\nTip: for a new token, name the chain explicitly:\n<code>bsc {}</code>",
        html::escape(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_pair() -> PairRecord {
        PairRecord {
            chain_id: "bsc".to_string(),
            pair_address: "0xpool".to_string(),
            dex_id: "pancakeswap".to_string(),
            base_symbol: "LAF".to_string(),
            base_name: Some("Laf".to_string()),
            quote_symbol: Some("WBNB".to_string()),
            price_usd: 0.06123,
            market_cap: Some(5_900_000.0),
            price_change_h24: Some(-3.2),
            liquidity_usd: Some(152_000.0),
            url: None,
        }
    }

    #[test]
    fn test_alert_message_carries_diff() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let text = format_pair_message(&sample_pair(), ReportKind::Alert { diff_percent: 10.0 }, at);

        assert!(text.starts_with("🚨 <b>Price alert (+10.0%)</b>"));
        assert!(text.contains("<b>LAF</b>/WBNB (Laf) · BSC · pancakeswap"));
        assert!(text.contains("💰 Price: $0.061230"));
        assert!(text.contains("💧 Liquidity: $152.0K"));
        assert!(text.contains("🏦 Market cap: $5.90M"));
        assert!(text.contains("https://dexscreener.com/bsc/0xpool"));
        assert!(text.ends_with("🕒 2024-05-01 08:30 UTC"));
    }

    #[test]
    fn test_missing_fields_render_as_na() {
        let mut pair = sample_pair();
        pair.market_cap = None;
        pair.price_change_h24 = None;
        pair.base_symbol = "<X>".to_string();
        pair.base_name = None;

        let text = format_pair_message(&pair, ReportKind::Scheduled, Utc::now());

        assert!(text.contains("📈 24h: n/a"));
        assert!(text.contains("🏦 Market cap: n/a"));
        assert!(text.contains("<b>&lt;X&gt;</b>"));
    }

    #[test]
    fn test_not_found_suggests_chain_form() {
        let text = format_not_found_message("abc");
        assert!(text.contains("<code>bsc abc</code>"));
    }

    #[test]
    fn test_loading_scope() {
        assert_eq!(format_loading_message(None), "⚡ Searching all chains...");
        assert_eq!(format_loading_message(Some("bsc")), "⚡ Searching bsc...");
    }
}
