use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::price_quotation;

pub fn init_quotations_router() -> Router<AppState> {
    Router::new().route("/price", post(price_quotation))
}
