//! End-to-end tests over the router with the in-memory store.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use warehouse_api::{router, AppState, MemoryStore, TableNames};

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()), TableNames::default());
    router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn post_then_get_by_id_returns_the_record() {
    let app = app();
    let record = json!({
        "id": "p1",
        "name": "Crate",
        "price": 12.5,
        "quantity_in_stock": 40,
        "id_category": "c1",
    });
    let (status, created) = send(&app, Method::POST, "/products", Some(record.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["message"], json!("Product created successfully"));
    assert_eq!(created["data"], record);

    let (status, fetched) = send(&app, Method::GET, "/products?id=p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn post_without_id_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"name": "No id"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Missing required fields"));
    assert_eq!(body["status"], json!(false));
}

#[tokio::test]
async fn get_without_id_lists_all_records() {
    let app = app();
    for id in ["s1", "s2"] {
        send(
            &app,
            Method::POST,
            "/stocks",
            Some(json!({"id": id, "id_product": "p1"})),
        )
        .await;
    }
    let (status, body) = send(&app, Method::GET, "/stocks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_by_unknown_id_is_404() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/products?id=ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Product not found"));
}

#[tokio::test]
async fn put_patches_only_submitted_fields() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"id": "p1", "name": "Crate", "price": 5})),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/products",
        Some(json!({"id": "p1", "price": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Product updated successfully"));

    let (_, fetched) = send(&app, Method::GET, "/products?id=p1", None).await;
    assert_eq!(fetched["name"], json!("Crate"));
    assert_eq!(fetched["price"], json!(9));
    assert_eq!(fetched["id"], json!("p1"));
}

#[tokio::test]
async fn put_with_no_updatable_fields_is_rejected() {
    let app = app();
    let (status, body) = send(&app, Method::PUT, "/products", Some(json!({"id": "p1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("No fields to update"));
}

#[tokio::test]
async fn delete_of_nonexistent_id_still_confirms() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/products", Some(json!({"id": "ghost"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Product deleted successfully"));
    assert_eq!(body["status"], json!(true));
}

#[tokio::test]
async fn category_type_filter_coerces_to_number() {
    let app = app();
    for (id, ty) in [("c1", 1), ("c2", 2), ("c3", 1)] {
        send(
            &app,
            Method::POST,
            "/categories",
            Some(json!({"id": id, "name": id, "type": ty})),
        )
        .await;
    }
    let (status, body) = send(&app, Method::GET, "/categories?type=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unit_duplicate_composite_is_rejected_before_write() {
    let app = app();
    let unit = json!({"id": "u1", "id_product": "p1", "ratio": 10, "unit": "box"});
    send(&app, Method::POST, "/units", Some(unit)).await;

    let clash = json!({"id": "u2", "id_product": "p1", "ratio": 10, "unit": "box"});
    let (status, body) = send(&app, Method::POST, "/units", Some(clash)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Unit already exists"));

    // The rejected record was never written.
    let (status, _) = send(&app, Method::GET, "/units?id=u2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unit_with_partial_composite_skips_the_check() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/units",
        Some(json!({"id": "u1", "id_product": "p1", "ratio": 10, "unit": "box"})),
    )
    .await;
    // Same product and ratio but no `unit` field: the composite check does not
    // run, so the create goes through.
    let (status, _) = send(
        &app,
        Method::POST,
        "/units",
        Some(json!({"id": "u2", "id_product": "p1", "ratio": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn units_filter_by_id_product() {
    let app = app();
    for (id, product) in [("u1", "p1"), ("u2", "p2"), ("u3", "p1")] {
        send(
            &app,
            Method::POST,
            "/units",
            Some(json!({"id": id, "id_product": product})),
        )
        .await;
    }
    let (status, body) = send(&app, Method::GET, "/units?id_product=p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn bulk_insert_dedupes_by_name_not_id() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/products/add-multiple",
        Some(json!({
            "items": [
                {"id": 1, "name": "A"},
                {"id": 2, "name": "A"},
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["insertedItems"].as_array().unwrap().len(), 1);
    assert_eq!(body["existingProducts"], json!(["A"]));
    assert_eq!(body["allProducts"].as_array().unwrap().len(), 1);
    assert_eq!(body["status"], json!(true));
}

#[tokio::test]
async fn bulk_insert_abort_leaves_earlier_items_written() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/suppliers/add-multiple",
        Some(json!({
            "items": [
                {"id": "s1", "name": "First"},
                {"id": "s2"},
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No rollback: the first supplier survived the aborted batch.
    let (status, fetched) = send(&app, Method::GET, "/suppliers?id=s1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], json!("First"));
}

#[tokio::test]
async fn bulk_insert_requires_items_array() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/categories/add-multiple",
        Some(json!({"items": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("Missing required fields or items array is empty")
    );
}

#[tokio::test]
async fn pagination_returns_the_requested_slice() {
    let app = app();
    for i in 0..25 {
        send(
            &app,
            Method::POST,
            "/products",
            Some(json!({"id": format!("p{i:02}"), "name": format!("Product {i}")})),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/products/get-paginations?limit=10&page=3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["totalPages"], json!(3));
    assert_eq!(body["totalItems"], json!(25));
    assert_eq!(body["page"], json!(3));

    let (status, body) = send(
        &app,
        Method::GET,
        "/products/get-paginations?limit=10&page=4",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Page number exceeds total pages"));
}

#[tokio::test]
async fn pagination_rejects_non_positive_parameters() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/products/get-paginations?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid pagination parameters"));
}

#[tokio::test]
async fn bill_suppliers_join_returns_referenced_only() {
    let app = app();
    for id in ["S1", "S2", "S3"] {
        send(
            &app,
            Method::POST,
            "/suppliers",
            Some(json!({"id": id, "name": id, "supplierId": id})),
        )
        .await;
    }
    for (id, supplier) in [("b1", "S1"), ("b2", "S3")] {
        send(
            &app,
            Method::POST,
            "/bills",
            Some(json!({"id": id, "supplierId": supplier})),
        )
        .await;
    }

    let (status, body) = send(&app, Method::GET, "/bills/suppliers", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["suppliers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["supplierId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["S1", "S3"]);
}

#[tokio::test]
async fn unknown_path_is_404_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Not Found"}));
}

#[tokio::test]
async fn unsupported_method_on_known_path_is_405() {
    let app = app();
    let (status, body) = send(&app, Method::PATCH, "/products", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], json!("Method Not Allowed"));
    assert_eq!(body["status"], json!(false));

    // Categories route no DELETE at all.
    let (status, _) = send(&app, Method::DELETE, "/categories", Some(json!({"id": "c1"}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn supplier_put_is_a_noop() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/suppliers",
        Some(json!({"id": "s1", "name": "Original"})),
    )
    .await;
    let (status, _) = send(
        &app,
        Method::PUT,
        "/suppliers",
        Some(json!({"id": "s1", "name": "Changed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, Method::GET, "/suppliers?id=s1", None).await;
    assert_eq!(fetched["name"], json!("Original"));
}

#[tokio::test]
async fn connection_probe_answers_without_storage() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/connection", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!(true));
}

#[tokio::test]
async fn malformed_json_body_is_an_internal_error() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], json!("Internal Server Error"));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn cors_header_is_wildcard() {
    let app = app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/connection")
        .header("origin", "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
