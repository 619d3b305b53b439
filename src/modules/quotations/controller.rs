use anyhow::anyhow;
use axum::Json;
use tracing::instrument;
use validator::Validate;

use adspace_core::AppError;

use crate::modules::quotations::model::{PriceQuotationRequest, QuotationPricing};
use crate::modules::quotations::service::QuotationService;
use crate::validator::{ValidatedJson, format_errors};

#[utoipa::path(
    post,
    path = "/api/quotations/price",
    request_body = PriceQuotationRequest,
    responses(
        (status = 200, description = "Priced line items with subtotal, VAT and grand total", body = QuotationPricing),
        (status = 400, description = "Malformed JSON body or date", body = crate::docs::ErrorResponse),
        (status = 422, description = "Empty quotation or invalid line item", body = crate::docs::ErrorResponse),
        (status = 429, description = "Rate limit exceeded; plain-text body with a retry hint", body = String)
    ),
    tag = "Quotations"
)]
#[instrument(skip_all, fields(line_items = dto.items.len()))]
pub async fn price_quotation(
    ValidatedJson(dto): ValidatedJson<PriceQuotationRequest>,
) -> Result<Json<QuotationPricing>, AppError> {
    for (index, item) in dto.items.iter().enumerate() {
        item.validate().map_err(|errors| {
            AppError::unprocessable(anyhow!("items[{}]: {}", index, format_errors(&errors)))
        })?;
    }

    let pricing = QuotationService::price(&dto.items)?;

    adspace_observability::track_quotation_priced(pricing.items.len());

    Ok(Json(pricing))
}
