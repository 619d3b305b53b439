use chrono::NaiveDate;
use tracing::debug;

use adspace_models::{
    ContractDuration, ContractPeriod, DAYS_PER_MONTH, MonthlyRate, ProratedPrice, VAT_MULTIPLIER,
    VAT_RATE,
};

/// Converts flat monthly rates into contract totals.
///
/// Uses a fixed 30-day month rather than calendar months so that prices
/// always agree with the "duration in months" shown on quotations.
pub struct ProrationService;

impl ProrationService {
    /// Total cost of renting at `monthly_rate` from `start_date` to `end_date` inclusive.
    ///
    /// Whole 30-day months are charged the full rate and leftover days a
    /// proportional share. A reversed range costs nothing. The result keeps
    /// full precision; round only for display.
    pub fn calculate_prorated_price(
        monthly_rate: MonthlyRate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> f64 {
        let duration = ContractPeriod::new(start_date, end_date).duration();
        Self::amount_for(monthly_rate, &duration)
    }

    /// Split a contract into 30-day months and leftover days.
    pub fn contract_duration(start_date: NaiveDate, end_date: NaiveDate) -> ContractDuration {
        ContractPeriod::new(start_date, end_date).duration()
    }

    /// Prorated total plus VAT and grand total.
    pub fn price_breakdown(
        monthly_rate: MonthlyRate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ProratedPrice {
        let period = ContractPeriod::new(start_date, end_date);
        if period.is_reversed() {
            debug!(%start_date, %end_date, "Reversed contract period priced as zero days");
        }

        let duration = period.duration();
        let total_amount = Self::amount_for(monthly_rate, &duration);

        ProratedPrice {
            monthly_rate: monthly_rate.amount(),
            start_date,
            end_date,
            duration,
            duration_label: duration.label(),
            total_amount,
            vat_amount: vat_amount(total_amount),
            grand_total: grand_total(total_amount),
        }
    }

    fn amount_for(monthly_rate: MonthlyRate, duration: &ContractDuration) -> f64 {
        let rate = monthly_rate.amount();
        let months = duration.whole_months as f64;
        let partial = duration.remaining_days as f64 / DAYS_PER_MONTH as f64;
        months * rate + partial * rate
    }
}

pub fn vat_amount(total_amount: f64) -> f64 {
    total_amount * VAT_RATE
}

pub fn grand_total(total_amount: f64) -> f64 {
    total_amount * VAT_MULTIPLIER
}
