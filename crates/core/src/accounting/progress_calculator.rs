//! Completion-percentage calculation for an investment's duration.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::investments::InvestmentPeriod;
use crate::utils::decimal_utils::round_display;

/// Converts duration and remaining-time day counts into a completion
/// percentage in `[0, 100]`.
///
/// `remaining_days` outside `[0, total_duration_days]` is clamped rather
/// than rejected, and the result is clamped again after the division to
/// absorb upstream drift from stale payloads. A non-positive total
/// short-circuits to zero instead of dividing by zero.
pub fn calculate_progress(total_duration_days: i64, remaining_days: i64) -> Decimal {
    if total_duration_days <= 0 {
        return Decimal::ZERO;
    }
    let remaining = remaining_days.clamp(0, total_duration_days);
    let elapsed = Decimal::from(total_duration_days - remaining);
    let progress = elapsed / Decimal::from(total_duration_days) * dec!(100);
    round_display(progress.clamp(Decimal::ZERO, dec!(100)))
}

/// Completion percentage for either period shape at the given instant.
///
/// The date-range shape is reduced to the same `(total, remaining)` day
/// counts before the division, so both shapes agree for equivalent states.
pub fn calculate_progress_at(period: &InvestmentPeriod, now: DateTime<Utc>) -> Decimal {
    let snapshot = period.normalize(now);
    calculate_progress(snapshot.total_duration_days, snapshot.remaining_days())
}
