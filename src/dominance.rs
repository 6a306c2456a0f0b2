//! Dominance calculation
//!
//! An asset's dominance is its market capitalization as a percentage of
//! the global market capitalization.

use crate::{error::RunError, types::AssetRecord};

/// Computes the dominance percentage for one asset
///
/// Returns 0.0 when the market cap is absent or zero, regardless of the
/// global cap. The global cap is only consulted when a division actually
/// happens; it is an upstream invariant and must then be positive and
/// finite, else the result is a data error rather than a silently
/// propagated non-finite value.
pub fn dominance(market_cap: Option<f64>, global_cap: f64) -> Result<f64, RunError> {
    let cap = match market_cap {
        Some(cap) if cap != 0.0 => cap,
        _ => return Ok(0.0),
    };

    if !global_cap.is_finite() || global_cap <= 0.0 {
        return Err(RunError::data(format!(
            "Global market cap must be positive and finite, got {global_cap}"
        )));
    }

    Ok(cap / global_cap * 100.0)
}

/// Fills in `dominance_pct` on every record, in place
pub fn enrich_records(records: &mut [AssetRecord], global_cap: f64) -> Result<(), RunError> {
    for record in records.iter_mut() {
        record.dominance_pct = dominance(record.market_cap_usd, global_cap)?;
    }
    Ok(())
}
