//! Types for the dominance reporter

/// One top-10 cryptocurrency as reported by the upstream source,
/// enriched locally with its dominance percentage.
///
/// All upstream fields except `symbol` are optional: the source may
/// omit any of them and the record passes them through rather than
/// inventing defaults. Raw JSON stays at the source boundary
/// ([`crate::source::MarketRow`]); this type is already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    /// Market cap rank as assigned upstream (not recomputed locally)
    pub rank: Option<u32>,

    /// Display name
    pub name: Option<String>,

    /// Ticker symbol, uppercased; empty if upstream omitted it
    pub symbol: String,

    /// Current price in USD
    pub price_usd: Option<f64>,

    /// Market capitalization in USD
    pub market_cap_usd: Option<f64>,

    /// 24h price change percentage
    pub change_24h: Option<f64>,

    /// Share of the global market cap, in percent; 0.0 when the
    /// market cap is absent or zero
    pub dominance_pct: f64,
}

impl AssetRecord {
    /// Display name with a placeholder for missing data
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}
