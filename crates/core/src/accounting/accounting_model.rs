use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level totals folded from a user's investment records.
/// Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_invested: Decimal,
    pub active_count: usize,
    pub total_earned: Decimal,
    pub average_return_percent: Decimal,
}

/// Projected return over a full investment duration, as a `{min, max}`
/// range. A fixed-rate offer projects a collapsed range with `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedReturnRange {
    pub min: Decimal,
    pub max: Decimal,
}
