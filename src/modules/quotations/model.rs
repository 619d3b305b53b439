use adspace_core::serde::deserialize_optional_string;
use adspace_core::serialize_currency;
use adspace_models::ProratedPrice;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One site rented for one contract period.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuotationLineItem {
    #[validate(length(min = 1, max = 200, message = "site_name must be 1-200 characters"))]
    #[schema(example = "EDSA Northbound LED")]
    pub site_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[schema(example = "DIG-0042")]
    pub site_code: Option<String>,
    #[validate(range(min = 0.0, message = "monthly_rate must not be negative"))]
    #[schema(example = 15000.0)]
    pub monthly_rate: f64,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2024-03-30")]
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PriceQuotationRequest {
    #[validate(length(min = 1, max = 100, message = "items must contain 1-100 line items"))]
    pub items: Vec<QuotationLineItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuotationLinePricing {
    pub site_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_code: Option<String>,
    pub price: ProratedPrice,
}

/// Priced quotation or cost estimate.
///
/// `subtotal` sums the unrounded line totals; VAT is derived from that sum,
/// not from the rounded per-line VAT figures.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuotationPricing {
    pub items: Vec<QuotationLinePricing>,
    #[serde(serialize_with = "serialize_currency")]
    pub subtotal: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub vat_amount: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub grand_total: f64,
}
