//! Unit tests for return-rate and estimated-return calculations.

use rust_decimal_macros::dec;

use crate::accounting::{calculate_estimated_return, calculate_return_rate};

#[test]
fn return_rate_basic() {
    assert_eq!(calculate_return_rate(dec!(1000), dec!(50)), dec!(5.00));
}

#[test]
fn zero_principal_yields_zero() {
    assert_eq!(calculate_return_rate(dec!(0), dec!(125)), dec!(0));
}

#[test]
fn zero_return_yields_zero() {
    assert_eq!(calculate_return_rate(dec!(750), dec!(0)), dec!(0));
}

#[test]
fn return_rate_rounds_to_two_decimals() {
    // 47 / 300 * 100 = 15.666...
    assert_eq!(calculate_return_rate(dec!(300), dec!(47)), dec!(15.67));
}

#[test]
fn estimated_return_range() {
    let range = calculate_estimated_return(dec!(1000), dec!(1), dec!(2), 30);
    assert_eq!(range.min, dec!(300.00));
    assert_eq!(range.max, dec!(600.00));
}

#[test]
fn fixed_rate_collapses_the_range() {
    let range = calculate_estimated_return(dec!(500), dec!(2), dec!(2), 10);
    assert_eq!(range.min, dec!(100.00));
    assert_eq!(range.max, range.min);
}

#[test]
fn zero_duration_projects_nothing() {
    let range = calculate_estimated_return(dec!(1000), dec!(1), dec!(2), 0);
    assert_eq!(range.min, dec!(0));
    assert_eq!(range.max, dec!(0));
}

#[test]
fn fractional_rates_round_at_the_boundary() {
    // 850 * 1.75 * 45 / 100 = 669.375
    let range = calculate_estimated_return(dec!(850), dec!(1.5), dec!(1.75), 45);
    assert_eq!(range.min, dec!(573.75));
    assert_eq!(range.max, dec!(669.38));
}
