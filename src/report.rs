//! Console report rendering
//!
//! Presentation sink: formats the enriched records as a column-aligned
//! report. Writes through `io::Write` so tests can assert the exact
//! output without capturing stdout.

use crate::types::AssetRecord;
use std::io::{self, Write};

/// Formats a USD amount with a `$` prefix and thousands separators
///
/// Sub-dollar prices keep 6 decimals, everything else 2.
pub fn format_price(price: f64) -> String {
    let decimals = if price < 1.0 { 6 } else { 2 };
    let raw = format!("{price:.decimals$}");
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
    format!("${}.{}", group_thousands(int_part), frac_part)
}

/// Inserts a comma every three digits, leaving any sign alone
fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Renders the report into the given writer
pub fn render_report(out: &mut impl Write, records: &[AssetRecord]) -> io::Result<()> {
    writeln!(out, "\n==============================")?;
    writeln!(out, "TOP 10 CRYPTOCURRENCIES (USD)")?;
    writeln!(out, "Dominance over global market cap")?;
    writeln!(out, "==============================\n")?;

    for record in records {
        let rank = record
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let price = record
            .price_usd
            .map(format_price)
            .unwrap_or_else(|| "-".to_string());
        let change = record
            .change_24h
            .map(|c| format!("{c:.2}%"))
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            out,
            "{:>2} | {:<18} ({:<6}) | Price: {:<14} | Dom: {:>5.2}% | 24h: {}",
            rank,
            record.display_name(),
            record.symbol,
            price,
            record.dominance_pct,
            change
        )?;
    }

    Ok(())
}

/// Renders the report to stdout
pub fn print_report(records: &[AssetRecord]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render_report(&mut handle, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: Option<f64>, change: Option<f64>, dominance: f64) -> AssetRecord {
        AssetRecord {
            rank: Some(1),
            name: Some("Bitcoin".to_string()),
            symbol: "BTC".to_string(),
            price_usd: price,
            market_cap_usd: Some(8e11),
            change_24h: change,
            dominance_pct: dominance,
        }
    }

    #[test]
    fn sub_dollar_prices_use_six_decimals() {
        assert_eq!(format_price(0.5), "$0.500000");
        assert_eq!(format_price(0.000123), "$0.000123");
    }

    #[test]
    fn dollar_prices_use_two_decimals_with_grouping() {
        assert_eq!(format_price(65000.0), "$65,000.00");
        assert_eq!(format_price(1.0), "$1.00");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn report_line_layout() {
        let mut buf = Vec::new();
        render_report(&mut buf, &[record(Some(65000.0), Some(1.23), 40.0)]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("TOP 10 CRYPTOCURRENCIES (USD)"));
        assert!(text.contains(
            " 1 | Bitcoin            (BTC   ) | Price: $65,000.00     | Dom: 40.00% | 24h: 1.23%"
        ));
    }

    #[test]
    fn enriched_record_renders_computed_dominance() {
        let mut rec = record(Some(65000.0), Some(1.23), 0.0);
        rec.market_cap_usd = Some(800_000_000_000.0);
        crate::dominance::enrich_records(std::slice::from_mut(&mut rec), 2_000_000_000_000.0)
            .unwrap();

        let mut buf = Vec::new();
        render_report(&mut buf, &[rec]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Dom: 40.00%"));
    }

    #[test]
    fn missing_change_renders_placeholder() {
        let mut buf = Vec::new();
        render_report(&mut buf, &[record(Some(0.5), None, 0.0)]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Price: $0.500000"));
        assert!(text.contains("24h: -"));
    }
}
