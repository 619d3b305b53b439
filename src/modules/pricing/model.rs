use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProrateRequest {
    /// Flat rate for one 30-day month
    #[validate(range(min = 0.0, message = "monthly_rate must not be negative"))]
    #[schema(example = 15000.0)]
    pub monthly_rate: f64,
    /// First day of the contract (inclusive)
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub start_date: NaiveDate,
    /// Last day of the contract (inclusive)
    #[schema(value_type = String, format = Date, example = "2024-03-30")]
    pub end_date: NaiveDate,
}
