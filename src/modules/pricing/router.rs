use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::prorate;

pub fn init_pricing_router() -> Router<AppState> {
    Router::new().route("/prorate", post(prorate))
}
