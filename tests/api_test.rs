//! HTTP API tests, driving the router in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use store_engine::api::{build_router, AppState};
use store_engine::config::Settings;
use tower::ServiceExt;

fn router() -> axum::Router {
    let state = AppState::from_settings(&Settings::default()).expect("app state");
    build_router(Arc::new(state))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).expect("request")).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(request).await
}

#[tokio::test]
async fn list_purchase_orders_first_page() {
    let (status, body) = get("/api/collections/purchase-orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatched"], 25);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["startIndex"], 1);
    assert_eq!(body["endIndex"], 10);
    assert_eq!(body["pageRecords"][0]["id"], "PO-2024-001");
}

#[tokio::test]
async fn list_vendors_searched_and_sorted() {
    let (status, body) = get("/api/collections/vendors?search=pune&sort=name&dir=desc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatched"], 2);
    assert_eq!(body["pageRecords"][0]["name"], "Horizon Enterprises");
    assert_eq!(body["pageRecords"][1]["name"], "Apex Medical Supplies");
}

#[tokio::test]
async fn list_items_page_past_the_end_is_empty() {
    let (status, body) = get("/api/collections/items?page=9&page_size=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageRecords"], json!([]));
    assert_eq!(body["totalPages"], 3);
}

#[tokio::test]
async fn list_patients_sorted_by_name() {
    let (status, body) = get("/api/collections/patients?sort=name&dir=asc&page_size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatched"], 25);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["startIndex"], 1);
    assert_eq!(body["endIndex"], 10);
    assert_eq!(body["pageRecords"][0]["name"], "Aarav Shah");
    assert_eq!(body["pageRecords"][9]["name"], "Jaya Pillai");
}

#[tokio::test]
async fn list_patients_narrowed_by_ward() {
    let (status, body) = get("/api/collections/patients?search=matern&page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatched"], 5);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["startIndex"], 1);
    assert_eq!(body["endIndex"], 5);
}

#[tokio::test]
async fn largest_page_number_is_an_empty_page() {
    let (status, body) = get("/api/collections/items?page=18446744073709551615").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageRecords"], json!([]));
    assert_eq!(body["totalMatched"], 12);
    assert_eq!(body["totalPages"], 2);
}

#[tokio::test]
async fn unknown_collection_is_not_found() {
    let (status, body) = get("/api/collections/suppliers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 404);
}

#[tokio::test]
async fn bad_sort_direction_is_bad_request() {
    let (status, body) = get("/api/collections/items?dir=sideways").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn view_over_posted_records() {
    let (status, body) = post(
        "/api/view",
        json!({
            "records": [
                {"id": 1, "name": "Gauze"},
                {"id": 2, "name": "Bandage"},
                {"id": 3, "name": "Gloves"}
            ],
            "params": {
                "searchTerm": "g",
                "searchFields": ["name"],
                "sortKey": "name",
                "sortDirection": "asc",
                "page": 1,
                "pageSize": 2
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatched"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["pageRecords"][0]["name"], "Bandage");
    assert_eq!(body["pageRecords"][1]["name"], "Gauze");
}

#[tokio::test]
async fn purchase_line_from_form_values() {
    let (status, body) = post(
        "/api/purchase/line",
        json!({
            "itemName": "Syringe 5ml",
            "quantity": "5",
            "rate": 200,
            "discountPercent": "10",
            "discountAmount": "",
            "cgstPercent": 6,
            "sgstPercent": 6
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["netAmount"], 1000.0);
    assert_eq!(body["taxableAmount"], 900.0);
    assert_eq!(body["cgstAmount"], 54.0);
    assert_eq!(body["lineTotal"], 1008.0);
    assert_eq!(body["itemName"], "Syringe 5ml");
}

#[tokio::test]
async fn purchase_totals_with_overall_discount() {
    let (status, body) = post(
        "/api/purchase/totals",
        json!({
            "lines": [
                {"quantity": 10, "rate": 100, "cgstPercent": 9, "sgstPercent": 9}
            ],
            "overallDiscount": {"type": "percent", "value": 10}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subTotal"], 1000.0);
    assert_eq!(body["totalTax"], 180.0);
    assert_eq!(body["overallDiscount"], 100.0);
    assert_eq!(body["grandTotal"], 1080.0);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let request = Request::post("/api/purchase/line")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn tax_slabs_default_list() {
    let (status, body) = get("/api/tax/slabs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(5));
    assert_eq!(body[3]["gstRate"], 18.0);
}
