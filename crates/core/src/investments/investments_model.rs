//! Investment record domain models.
//!
//! Records are owned by the remote backend; the client holds read-only
//! projections fetched per session and never mutates status or returns
//! locally.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::time_utils::days_between_ceil;

/// Lifecycle of an investment. Transitions are backend-driven:
/// `Pending -> Active` on confirmation, `Active -> Completed` when the
/// remaining duration reaches zero. The client only reflects the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    #[default]
    Pending,
    Active,
    Completed,
}

/// The two time representations an investment record may carry.
///
/// Some backend payloads report `{totalDurationDays, remainingDays}`,
/// others `{startDate, endDate}`. Either shape deserializes; `normalize`
/// reduces both to the same `(total, elapsed)` day counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvestmentPeriod {
    #[serde(rename_all = "camelCase")]
    DaysRemaining {
        total_duration_days: i64,
        remaining_days: i64,
    },
    #[serde(rename_all = "camelCase")]
    DateRange {
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    },
}

/// Day counts for one point in an investment's lifetime, normalized from
/// either period shape. `elapsed_days` is already clamped into
/// `[0, total_duration_days]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSnapshot {
    pub total_duration_days: i64,
    pub elapsed_days: i64,
}

impl PeriodSnapshot {
    pub fn remaining_days(&self) -> i64 {
        (self.total_duration_days - self.elapsed_days).max(0)
    }
}

impl InvestmentPeriod {
    /// Normalizes either time shape into day counts at the given instant.
    ///
    /// Out-of-range inputs are clamped, not rejected: stale payloads may
    /// report remaining days past the total, or an instant outside the
    /// date window. A non-positive total maps to an all-zero snapshot.
    pub fn normalize(&self, now: DateTime<Utc>) -> PeriodSnapshot {
        match *self {
            InvestmentPeriod::DaysRemaining {
                total_duration_days,
                remaining_days,
            } => {
                if total_duration_days <= 0 {
                    return PeriodSnapshot {
                        total_duration_days: 0,
                        elapsed_days: 0,
                    };
                }
                let remaining = remaining_days.clamp(0, total_duration_days);
                PeriodSnapshot {
                    total_duration_days,
                    elapsed_days: total_duration_days - remaining,
                }
            }
            InvestmentPeriod::DateRange {
                start_date,
                end_date,
            } => {
                let total_duration_days = days_between_ceil(start_date, end_date);
                let elapsed_days =
                    days_between_ceil(start_date, now).clamp(0, total_duration_days);
                PeriodSnapshot {
                    total_duration_days,
                    elapsed_days,
                }
            }
        }
    }
}

/// Read-only projection of one placed investment, as fetched per session
/// from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub id: String,
    pub offer_id: String,
    /// Amount placed at creation, fixed thereafter.
    pub principal: Decimal,
    /// Total profit credited so far. Mutated only by the backend;
    /// monotonically non-decreasing between refetches.
    pub accumulated_return: Decimal,
    pub status: InvestmentStatus,
    #[serde(flatten)]
    pub period: InvestmentPeriod,
}

impl InvestmentRecord {
    /// Boundary validation for a record as mapped from the session payload.
    /// The calculators assume non-negative amounts and a well-formed period.
    pub fn validate(&self) -> Result<()> {
        if self.principal < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Record {}: negative principal {}",
                self.id, self.principal
            ))
            .into());
        }
        if self.accumulated_return < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Record {}: negative accumulated return {}",
                self.id, self.accumulated_return
            ))
            .into());
        }
        match self.period {
            InvestmentPeriod::DaysRemaining {
                total_duration_days,
                ..
            } if total_duration_days < 0 => Err(ValidationError::InvalidInput(format!(
                "Record {}: negative duration {} days",
                self.id, total_duration_days
            ))
            .into()),
            InvestmentPeriod::DateRange {
                start_date,
                end_date,
            } if end_date < start_date => Err(ValidationError::InvalidInput(format!(
                "Record {}: end date {} precedes start date {}",
                self.id, end_date, start_date
            ))
            .into()),
            _ => Ok(()),
        }
    }
}
