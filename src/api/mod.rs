pub mod call_numbers;
pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Call numbers
        .route("/call-numbers/key", post(call_numbers::derive_sort_key))
        .route("/call-numbers/sort", post(call_numbers::sort_call_numbers))
        .route("/call-numbers/sort-csv", post(call_numbers::sort_csv))
        .with_state(state)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
