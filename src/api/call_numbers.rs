use axum::{
    body::Bytes,
    extract::{Json, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::modules::cataloguing_pro::{derive_key, normalize, KeyField};
use crate::modules::{export, import};
use crate::services::shelf_service;

#[derive(Deserialize, ToSchema)]
pub struct KeyRequest {
    pub call_number: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct SortRequest {
    pub call_numbers: Vec<Option<String>>,
}

#[derive(Deserialize)]
pub struct SortCsvParams {
    pub column: String,
}

#[derive(Serialize, ToSchema)]
pub struct KeyResponse {
    pub call_number: Option<String>,
    pub normalized: String,
    /// False when the call number did not parse and sorts as plain text
    pub shelved: bool,
    #[schema(value_type = Vec<Object>)]
    pub key: Vec<KeyField>,
}

#[derive(Serialize, ToSchema)]
pub struct SortedCallNumber {
    /// Index in the request
    pub position: usize,
    pub call_number: Option<String>,
    pub normalized: String,
    pub shelved: bool,
    #[schema(value_type = Vec<Object>)]
    pub key: Vec<KeyField>,
}

#[derive(Serialize, ToSchema)]
pub struct SortResponse {
    pub sorted: Vec<SortedCallNumber>,
    pub unshelved: usize,
}

#[utoipa::path(
    post,
    path = "/api/call-numbers/key",
    request_body = KeyRequest,
    responses(
        (status = 200, description = "Normalized call number and its sort key", body = KeyResponse)
    )
)]
pub async fn derive_sort_key(Json(payload): Json<KeyRequest>) -> Json<KeyResponse> {
    let normalized = normalize(payload.call_number.as_deref());
    let key = derive_key(&normalized);

    Json(KeyResponse {
        call_number: payload.call_number,
        normalized,
        shelved: key.is_shelved(),
        key: key.fields(),
    })
}

#[utoipa::path(
    post,
    path = "/api/call-numbers/sort",
    request_body = SortRequest,
    responses(
        (status = 200, description = "Call numbers in shelf order", body = SortResponse),
        (status = 400, description = "Too many call numbers")
    )
)]
pub async fn sort_call_numbers(
    State(state): State<AppState>,
    Json(payload): Json<SortRequest>,
) -> impl IntoResponse {
    let max = state.config().max_sort_batch;
    if payload.call_numbers.len() > max {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("At most {} call numbers can be sorted per request", max)
            })),
        )
            .into_response();
    }

    let call_numbers: Vec<Option<&str>> =
        payload.call_numbers.iter().map(|c| c.as_deref()).collect();
    let entries = shelf_service::shelve(&call_numbers);

    let unshelved = entries.iter().filter(|e| !e.key.is_shelved()).count();
    let sorted = entries
        .into_iter()
        .map(|entry| SortedCallNumber {
            position: entry.position,
            call_number: payload.call_numbers[entry.position].clone(),
            shelved: entry.key.is_shelved(),
            key: entry.key.fields(),
            normalized: entry.normalized,
        })
        .collect();

    tracing::debug!(
        "Sorted {} call numbers ({} unshelved)",
        call_numbers.len(),
        unshelved
    );

    (StatusCode::OK, Json(SortResponse { sorted, unshelved })).into_response()
}

/// Sort a CSV body by one of its columns and return the sorted CSV.
pub async fn sort_csv(
    State(state): State<AppState>,
    Query(params): Query<SortCsvParams>,
    body: Bytes,
) -> impl IntoResponse {
    let result = import::read_shelf_list(&body[..], &params.column).and_then(|list| {
        let (sorted, _) =
            shelf_service::sort_shelf_list(list, &state.config().normalized_column);
        let mut out = Vec::new();
        export::write_shelf_list(&mut out, &sorted)?;
        Ok(out)
    });

    match result {
        Ok(csv) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], csv).into_response(),
        Err(e) => {
            let status = match e {
                DomainError::Validation(_) | DomainError::Csv(_) => StatusCode::BAD_REQUEST,
                DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                DomainError::Io(_) | DomainError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}
