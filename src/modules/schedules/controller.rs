use axum::Json;
use tracing::instrument;

use adspace_models::FitResult;

use crate::modules::schedules::model::ScheduleFitRequest;
use crate::modules::schedules::service::ScheduleFitService;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/schedules/validate",
    request_body = ScheduleFitRequest,
    responses(
        (status = 200, description = "Fit verdict with explanation and suggested corrections", body = FitResult),
        (status = 400, description = "Malformed JSON body", body = crate::docs::ErrorResponse),
        (status = 429, description = "Rate limit exceeded; plain-text body with a retry hint", body = String)
    ),
    tag = "Schedules"
)]
#[instrument(skip_all, fields(start_time = %dto.start_time, end_time = %dto.end_time))]
pub async fn validate_schedule(
    ValidatedJson(dto): ValidatedJson<ScheduleFitRequest>,
) -> Json<FitResult> {
    let result = ScheduleFitService::validate(&dto);

    adspace_observability::track_schedule_validation(
        result.is_valid,
        result.suggestions().count(),
    );

    Json(result)
}
