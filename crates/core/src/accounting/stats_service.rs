//! Portfolio-level aggregation over a user's investment records.

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::accounting::PortfolioStats;
use crate::investments::{InvestmentRecord, InvestmentStatus};
use crate::utils::decimal_utils::round_display;

/// Folds a record snapshot into portfolio totals.
///
/// Total invested and total earned sum over all records, completed
/// included: the portfolio view reports historical totals, not just the
/// live book. The fold is order-independent and deterministic, so
/// repeated calls on an unchanged snapshot return identical stats. An
/// empty snapshot yields all-zero stats.
pub fn aggregate_portfolio_stats(records: &[InvestmentRecord]) -> PortfolioStats {
    debug!("Aggregating portfolio stats over {} records", records.len());

    let total_invested: Decimal = records.iter().map(|r| r.principal).sum();
    let active_count = records
        .iter()
        .filter(|r| r.status == InvestmentStatus::Active)
        .count();
    let total_earned: Decimal = records.iter().map(|r| r.accumulated_return).sum();

    let average_return_percent = if total_invested > Decimal::zero() {
        round_display(total_earned / total_invested * dec!(100))
    } else {
        Decimal::zero()
    };

    PortfolioStats {
        total_invested,
        active_count,
        total_earned,
        average_return_percent,
    }
}
