use chrono::{DateTime, Utc};

// Compact USD amount: $950, $12.5K, $1.52M, $3.1B
pub fn format_usd_compact(amount: f64) -> String {
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };

    if abs >= 1_000_000_000.0 {
        format!("{}${:.2}B", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}${:.2}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}K", sign, abs / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs)
    }
}

// Price with enough decimals to show low-priced tokens
pub fn format_price(price: f64) -> String {
    if price >= 1.0 {
        format!("${:.4}", price)
    } else if price >= 0.0001 {
        format!("${:.6}", price)
    } else if price > 0.0 {
        format!("${:.10}", price)
    } else {
        "$0".to_string()
    }
}

// Signed percentage, one decimal
pub fn format_percent(percent: f64) -> String {
    format!("{:+.1}%", percent)
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.chars().count() <= 10 {
        return address.to_string();
    }

    let chars: Vec<char> = address.chars().collect();
    let start: String = chars[..5].iter().collect();
    let end: String = chars[chars.len() - 5..].iter().collect();

    format!("{}...{}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_usd_compact() {
        assert_eq!(format_usd_compact(950.0), "$950");
        assert_eq!(format_usd_compact(12_500.0), "$12.5K");
        assert_eq!(format_usd_compact(1_520_000.0), "$1.52M");
        assert_eq!(format_usd_compact(3_100_000_000.0), "$3.10B");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1.5), "$1.5000");
        assert_eq!(format_price(0.061234), "$0.061234");
        assert_eq!(format_price(0.0000012), "$0.0000012000");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0), "+10.0%");
        assert_eq!(format_percent(-3.24), "-3.2%");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01 08:30 UTC");
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address("short"), "short");
        assert_eq!(
            shorten_address("0x3bec20ca77e100c50ef0d0066f4c2b348e615f48"),
            "0x3be...15f48"
        );
    }
}
