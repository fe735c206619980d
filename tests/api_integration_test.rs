use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use loc_shelf::config::Config;
use loc_shelf::server::build_router;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

fn test_app() -> Router {
    build_router(Config {
        max_sort_batch: 5,
        ..Config::default()
    })
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "loc-shelf");
}

#[tokio::test]
async fn test_derive_key_for_call_number() {
    let (status, json) = post_json(
        test_app(),
        "/api/call-numbers/key",
        json!({ "call_number": "PS 3623 .A78 M45 2003" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["normalized"], "PS3623.A78 M45 2003");
    assert_eq!(json["shelved"], true);
    assert_eq!(
        json["key"],
        json!(["PS", 3623, -1, "A", 78, "M", 45, 2003, ""])
    );
}

#[tokio::test]
async fn test_derive_key_for_absent_call_number() {
    let (status, json) = post_json(
        test_app(),
        "/api/call-numbers/key",
        json!({ "call_number": null }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["normalized"], "");
    assert_eq!(json["shelved"], false);
    assert_eq!(json["key"], json!([""]));
}

#[tokio::test]
async fn test_sort_call_numbers() {
    let (status, json) = post_json(
        test_app(),
        "/api/call-numbers/sort",
        json!({
            "call_numbers": ["QA76.73.C15 S53 2010", null, "QA76.73.P98 R45", "QA76.9 .A25"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["unshelved"], 1);

    let positions: Vec<u64> = json["sorted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["position"].as_u64().unwrap())
        .collect();
    assert_eq!(positions, vec![3, 0, 2, 1]);
    assert_eq!(json["sorted"][0]["normalized"], "QA76.9.A25");
    assert_eq!(json["sorted"][3]["call_number"], Value::Null);
}

#[tokio::test]
async fn test_sort_rejects_oversized_batch() {
    let (status, json) = post_json(
        test_app(),
        "/api/call-numbers/sort",
        json!({ "call_numbers": ["A1.B1", "A1.B2", "A1.B3", "A1.B4", "A1.B5", "A1.B6"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_sort_csv_body() {
    let req = Request::builder()
        .uri("/api/call-numbers/sort-csv?column=call")
        .method("POST")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from("id,call\n1,QA76.73.P98 R45\n2,QA76.9 .A25\n"))
        .unwrap();

    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        String::from_utf8(body.to_vec()).unwrap(),
        "id,call,normalized\n2,QA76.9 .A25,QA76.9.A25\n1,QA76.73.P98 R45,QA76.73.P98 R45\n"
    );
}

#[tokio::test]
async fn test_sort_csv_unknown_column() {
    let req = Request::builder()
        .uri("/api/call-numbers/sort-csv?column=shelfmark")
        .method("POST")
        .body(Body::from("id,call\n1,QA76.9 .A25\n"))
        .unwrap();

    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Validation error: Column 'shelfmark' not found");
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let req = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["paths"]["/api/call-numbers/sort"].is_object());
    assert!(json["paths"]["/api/call-numbers/key"].is_object());
}
