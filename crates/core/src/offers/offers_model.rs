//! Investment offer domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Offer tiers, from the entry-level plan up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferTier {
    Starter,
    Growth,
    Premium,
    Elite,
}

/// Daily return rate as an inclusive `{min, max}` percentage range.
/// A fixed single rate is the degenerate `min == max` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRateRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Domain model representing a purchasable investment plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOffer {
    pub id: String,
    pub name: String,
    pub tier: OfferTier,
    /// 1-5, with 1 being lowest risk.
    pub risk_level: u8,
    #[serde(default)]
    pub description: Option<String>,
    pub min_principal: Decimal,
    pub max_principal: Decimal,
    pub daily_rate: DailyRateRange,
    pub duration_days: i64,
}

impl InvestmentOffer {
    /// Checks the structural invariants of an offer as received from the
    /// backend. The calculators assume these hold.
    pub fn validate(&self) -> Result<()> {
        if self.min_principal < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Offer {}: negative minimum principal {}",
                self.id, self.min_principal
            ))
            .into());
        }
        if self.min_principal > self.max_principal {
            return Err(ValidationError::InvalidInput(format!(
                "Offer {}: minimum principal {} exceeds maximum {}",
                self.id, self.min_principal, self.max_principal
            ))
            .into());
        }
        if self.daily_rate.min < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Offer {}: negative daily rate {}",
                self.id, self.daily_rate.min
            ))
            .into());
        }
        if self.daily_rate.min > self.daily_rate.max {
            return Err(ValidationError::InvalidInput(format!(
                "Offer {}: daily rate minimum {} exceeds maximum {}",
                self.id, self.daily_rate.min, self.daily_rate.max
            ))
            .into());
        }
        if self.duration_days <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "Offer {}: duration must be positive, got {} days",
                self.id, self.duration_days
            ))
            .into());
        }
        Ok(())
    }

    /// Validates a principal amount against the offer's inclusive bounds
    /// before an investment is placed.
    pub fn validate_principal(&self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Investment amount must be positive, got {}",
                amount
            ))
            .into());
        }
        if amount < self.min_principal || amount > self.max_principal {
            return Err(ValidationError::InvalidInput(format!(
                "Investment must be between {} and {}",
                self.min_principal, self.max_principal
            ))
            .into());
        }
        Ok(())
    }
}
