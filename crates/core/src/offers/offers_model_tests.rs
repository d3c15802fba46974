//! Tests for offer models and boundary validation.

use rust_decimal_macros::dec;

use crate::offers::{DailyRateRange, InvestmentOffer, OfferTier};

fn starter_offer() -> InvestmentOffer {
    InvestmentOffer {
        id: "offer-1".to_string(),
        name: "Forex Starter".to_string(),
        tier: OfferTier::Starter,
        risk_level: 1,
        description: None,
        min_principal: dec!(100),
        max_principal: dec!(1000),
        daily_rate: DailyRateRange {
            min: dec!(1),
            max: dec!(2),
        },
        duration_days: 30,
    }
}

#[test]
fn well_formed_offer_validates() {
    assert!(starter_offer().validate().is_ok());
}

#[test]
fn inverted_principal_bounds_are_rejected() {
    let mut offer = starter_offer();
    offer.min_principal = dec!(5000);
    assert!(offer.validate().is_err());
}

#[test]
fn negative_principal_bound_is_rejected() {
    let mut offer = starter_offer();
    offer.min_principal = dec!(-100);
    assert!(offer.validate().is_err());
}

#[test]
fn inverted_rate_range_is_rejected() {
    let mut offer = starter_offer();
    offer.daily_rate = DailyRateRange {
        min: dec!(3),
        max: dec!(2),
    };
    assert!(offer.validate().is_err());
}

#[test]
fn negative_rate_is_rejected() {
    let mut offer = starter_offer();
    offer.daily_rate = DailyRateRange {
        min: dec!(-1),
        max: dec!(2),
    };
    assert!(offer.validate().is_err());
}

#[test]
fn non_positive_duration_is_rejected() {
    let mut offer = starter_offer();
    offer.duration_days = 0;
    assert!(offer.validate().is_err());
}

#[test]
fn fixed_rate_offer_validates() {
    let mut offer = starter_offer();
    offer.daily_rate = DailyRateRange {
        min: dec!(1.5),
        max: dec!(1.5),
    };
    assert!(offer.validate().is_ok());
}

#[test]
fn principal_within_bounds_is_accepted() {
    let offer = starter_offer();
    assert!(offer.validate_principal(dec!(100)).is_ok());
    assert!(offer.validate_principal(dec!(550)).is_ok());
    assert!(offer.validate_principal(dec!(1000)).is_ok());
}

#[test]
fn principal_outside_bounds_is_rejected() {
    let offer = starter_offer();
    assert!(offer.validate_principal(dec!(99.99)).is_err());
    assert!(offer.validate_principal(dec!(1000.01)).is_err());
}

#[test]
fn non_positive_principal_is_rejected() {
    let offer = starter_offer();
    assert!(offer.validate_principal(dec!(0)).is_err());
    assert!(offer.validate_principal(dec!(-50)).is_err());
}

#[test]
fn offer_deserializes_from_camel_case_payload() {
    let json = r#"{
        "id": "2",
        "name": "Growth Trader",
        "tier": "Growth",
        "riskLevel": 2,
        "minPrincipal": 1000,
        "maxPrincipal": 5000,
        "dailyRate": { "min": 1.5, "max": 3 },
        "durationDays": 60
    }"#;
    let offer: InvestmentOffer = serde_json::from_str(json).unwrap();
    assert_eq!(offer.tier, OfferTier::Growth);
    assert_eq!(offer.daily_rate.max, dec!(3));
    assert_eq!(offer.description, None);
    assert!(offer.validate().is_ok());
}
