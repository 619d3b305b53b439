use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::validate_schedule;

pub fn init_schedules_router() -> Router<AppState> {
    Router::new().route("/validate", post(validate_schedule))
}
