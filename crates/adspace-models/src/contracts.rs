//! Contract periods and prorated pricing.
//!
//! Rental contracts are priced with a fixed 30-day month: a 45-day campaign
//! costs one and a half monthly rates regardless of which calendar months it
//! spans. The "duration in months" shown on quotations uses the same divisor,
//! so the two always agree.

use adspace_core::serialize_currency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Length of a billing month in days.
pub const DAYS_PER_MONTH: i64 = 30;

/// Value-added tax applied to contract totals.
pub const VAT_RATE: f64 = 0.12;

/// Multiplier turning a net total into a VAT-inclusive grand total.
pub const VAT_MULTIPLIER: f64 = 1.12;

/// An inclusive rental/campaign date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContractPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ContractPeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Inclusive day count. A same-day contract is one day; a reversed range is zero.
    pub fn duration_days(&self) -> i64 {
        if self.is_reversed() {
            return 0;
        }
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn duration(&self) -> ContractDuration {
        ContractDuration::from_days(self.duration_days())
    }
}

/// A day count split into 30-day months and leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContractDuration {
    pub duration_days: i64,
    pub whole_months: i64,
    pub remaining_days: i64,
}

impl ContractDuration {
    pub fn from_days(days: i64) -> Self {
        let days = days.max(0);
        Self {
            duration_days: days,
            whole_months: days / DAYS_PER_MONTH,
            remaining_days: days % DAYS_PER_MONTH,
        }
    }

    /// Human label such as `3 months`, `1 month and 15 days` or `15 days`.
    pub fn label(&self) -> String {
        let months = match self.whole_months {
            0 => None,
            1 => Some("1 month".to_string()),
            n => Some(format!("{} months", n)),
        };
        let days = match self.remaining_days {
            0 => None,
            1 => Some("1 day".to_string()),
            n => Some(format!("{} days", n)),
        };

        match (months, days) {
            (Some(m), Some(d)) => format!("{} and {}", m, d),
            (Some(m), None) => m,
            (None, Some(d)) => d,
            (None, None) => "0 days".to_string(),
        }
    }
}

/// A monthly rate applied across a contract period.
///
/// Amounts are kept at full precision and rounded to two decimals only when
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProratedPrice {
    #[serde(serialize_with = "serialize_currency")]
    pub monthly_rate: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: ContractDuration,
    pub duration_label: String,
    #[serde(serialize_with = "serialize_currency")]
    pub total_amount: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub vat_amount: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub grand_total: f64,
}
