use adspace_core::serde::deserialize_string_or_number;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Raw dynamic-content fields as typed into the inventory form.
///
/// Every field is accepted as text (numbers may also be sent as JSON
/// numbers); parsing happens in [`ScheduleFitService`](super::service::ScheduleFitService)
/// so that bad input becomes an explanatory result rather than a rejected request.
///
/// `Validate` declares no rules; it is derived only so the type can be
/// extracted with [`ValidatedJson`](crate::validator::ValidatedJson).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScheduleFitRequest {
    /// Daily start time, `HH:MM` (24-hour)
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    #[schema(example = "06:00")]
    pub start_time: String,
    /// Daily end time, `HH:MM` (24-hour); earlier than start means the window crosses midnight
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    #[schema(example = "22:00")]
    pub end_time: String,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    #[schema(value_type = String, example = "10")]
    pub spot_duration_seconds: String,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    #[schema(value_type = String, example = "18")]
    pub spots_per_loop: String,
}

impl ScheduleFitRequest {
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        spot_duration_seconds: impl Into<String>,
        spots_per_loop: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            spot_duration_seconds: spot_duration_seconds.into(),
            spots_per_loop: spots_per_loop.into(),
        }
    }
}
