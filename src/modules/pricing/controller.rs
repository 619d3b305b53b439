use axum::Json;
use tracing::instrument;

use adspace_core::AppError;
use adspace_models::{MonthlyRate, ProratedPrice};

use crate::modules::pricing::model::ProrateRequest;
use crate::modules::pricing::service::ProrationService;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/pricing/prorate",
    request_body = ProrateRequest,
    responses(
        (status = 200, description = "Prorated total with VAT", body = ProratedPrice),
        (status = 400, description = "Malformed JSON body or date", body = crate::docs::ErrorResponse),
        (status = 422, description = "Negative monthly rate", body = crate::docs::ErrorResponse),
        (status = 429, description = "Rate limit exceeded; plain-text body with a retry hint", body = String)
    ),
    tag = "Pricing"
)]
#[instrument(skip_all, fields(start_date = %dto.start_date, end_date = %dto.end_date))]
pub async fn prorate(
    ValidatedJson(dto): ValidatedJson<ProrateRequest>,
) -> Result<Json<ProratedPrice>, AppError> {
    let rate = MonthlyRate::new(dto.monthly_rate).map_err(AppError::unprocessable)?;

    let price = ProrationService::price_breakdown(rate, dto.start_date, dto.end_date);

    adspace_observability::track_contract_priced(price.duration.duration_days);

    Ok(Json(price))
}
