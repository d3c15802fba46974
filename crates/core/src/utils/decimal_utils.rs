use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a display-facing figure to the shared display precision.
///
/// Every public calculator output passes through this before it reaches the
/// presentation layer, so rounding happens in exactly one place.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DECIMAL_PRECISION)
}
