/// Decimal precision for display-facing figures
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Seconds in a day, for deriving day counts from instants
pub const SECONDS_PER_DAY: i64 = 86_400;
