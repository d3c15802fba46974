//! Return-rate and estimated-return calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::accounting::EstimatedReturnRange;
use crate::utils::decimal_utils::round_display;

/// Percentage yield of an investment so far:
/// `(accumulated_return / principal) * 100`, rounded to two decimals.
///
/// A non-positive principal has no meaningful yield and returns zero
/// rather than propagating a division error into the display path.
pub fn calculate_return_rate(principal: Decimal, accumulated_return: Decimal) -> Decimal {
    if principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_display(accumulated_return / principal * dec!(100))
}

/// Projects the return range over a full duration assuming simple daily
/// accrual: `principal * rate * duration_days / 100` per bound, each
/// rounded to two decimals.
///
/// The projection does not compound; if the backend's accrual schedule
/// compounds or prorates, these figures are an approximation. Inputs are
/// assumed pre-validated (`InvestmentOffer::validate` and
/// `validate_principal` are the boundary). A fixed-rate offer falls out
/// of the same formula as a collapsed `min == max` range.
pub fn calculate_estimated_return(
    principal: Decimal,
    daily_rate_min: Decimal,
    daily_rate_max: Decimal,
    duration_days: i64,
) -> EstimatedReturnRange {
    let days = Decimal::from(duration_days);
    EstimatedReturnRange {
        min: round_display(principal * daily_rate_min * days / dec!(100)),
        max: round_display(principal * daily_rate_max * days / dec!(100)),
    }
}
