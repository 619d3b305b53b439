use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use adspace_models::{ContractDuration, FitResult, LoopSuggestion, ProratedPrice, ScheduleParameter};

use crate::modules::pricing::model::ProrateRequest;
use crate::modules::quotations::model::{
    PriceQuotationRequest, QuotationLineItem, QuotationLinePricing, QuotationPricing,
};
use crate::modules::schedules::model::ScheduleFitRequest;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "monthly_rate must not be negative")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::schedules::controller::validate_schedule,
        crate::modules::pricing::controller::prorate,
        crate::modules::quotations::controller::price_quotation,
    ),
    components(
        schemas(
            ScheduleFitRequest,
            FitResult,
            LoopSuggestion,
            ScheduleParameter,
            ProrateRequest,
            ProratedPrice,
            ContractDuration,
            PriceQuotationRequest,
            QuotationLineItem,
            QuotationLinePricing,
            QuotationPricing,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Schedules", description = "Digital-signage loop fit validation"),
        (name = "Pricing", description = "Prorated contract pricing"),
        (name = "Quotations", description = "Multi-site quotation and cost-estimate totals")
    ),
    info(
        title = "Adspace API",
        version = "0.1.0",
        description = "Schedule fit checks and contract pricing for outdoor and digital advertising inventory.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
