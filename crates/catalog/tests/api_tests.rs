use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use catalog::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

// A lazy pool lets router-level behavior (routing, extraction, rejection) be
// exercised without a database; only requests that reach a repository touch it.
fn test_router() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/catalog_test")
        .expect("valid connection string");

    AppRouter::build(AppState::new(pool))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn welcome_message_on_all_aliases() {
    let app = test_router();

    for path in ["/", "/home", "/index"] {
        let response = send(&app, "GET", path, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Welcome to my API.");
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = test_router();

    let response = send(&app, "GET", "/nothing-here", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_product_with_missing_field_is_400() {
    let app = test_router();

    // price omitted
    let payload = json!({
        "name": "Hammer",
        "category_id": 1,
        "quantity": 10.0,
        "details": "Steel"
    });

    let response = send(&app, "POST", "/products", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn create_category_with_missing_details_is_400() {
    let app = test_router();

    let response = send(&app, "POST", "/categories", Some(json!({ "name": "Tools" }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_product_with_empty_name_is_400() {
    let app = test_router();

    let payload = json!({
        "name": "",
        "category_id": 1,
        "quantity": 1.0,
        "price": 1.0,
        "details": ""
    });

    let response = send(&app, "PUT", "/products/1", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// Needs a running PostgreSQL pointed to by DATABASE_URL, so ignored by default:
// cargo test -p catalog -- --ignored
#[tokio::test]
#[ignore]
async fn full_crud_flow_against_database() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("failed to connect");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    sqlx::query("DELETE FROM product").execute(&pool).await.unwrap();
    sqlx::query("DELETE FROM category").execute(&pool).await.unwrap();

    let app = AppRouter::build(AppState::new(pool));

    // Category create → 201 detail view with assigned id and timestamp.
    let response = send(
        &app,
        "POST",
        "/categories",
        Some(json!({ "name": "Tools", "details": "Hand tools" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let category = body_json(response).await;
    assert_eq!(category["name"], "Tools");
    assert_eq!(category["details"], "Hand tools");
    assert!(category["created"].is_string());
    let category_id = category["id"].as_i64().unwrap();

    // Duplicate category name → 409, no new row.
    let response = send(
        &app,
        "POST",
        "/categories",
        Some(json!({ "name": "Tools", "details": "Duplicate" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, "GET", "/categories", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let categories = body_json(response).await;
    let categories = categories.as_array().unwrap();
    assert_eq!(categories.len(), 1);
    // List view carries no created field.
    assert!(categories[0].get("created").is_none());

    // Product create → 201 detail view.
    let response = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "name": "Hammer",
            "category_id": category_id,
            "quantity": 10.0,
            "price": 9.99,
            "details": "Steel"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let product = body_json(response).await;
    assert_eq!(product["name"], "Hammer");
    assert_eq!(product["price"], json!(9.99));
    let product_id = product["id"].as_i64().unwrap();
    let created = product["created"].clone();

    // Duplicate product name → 409.
    let response = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "name": "Hammer",
            "category_id": category_id,
            "quantity": 1.0,
            "price": 1.0,
            "details": "Duplicate"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Detail fetch.
    let response = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["quantity"], json!(10.0));
    assert_eq!(detail["created"], created);

    // List view carries no created field.
    let response = send(&app, "GET", "/products", None).await;
    let products = body_json(response).await;
    assert!(products[0].get("created").is_none());

    // Update replaces all provided fields, created stays put.
    let response = send(
        &app,
        "PUT",
        &format!("/products/{product_id}"),
        Some(json!({
            "name": "Sledgehammer",
            "category_id": category_id,
            "quantity": 4.0,
            "price": 19.5,
            "details": "Heavy"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Sledgehammer");
    assert_eq!(updated["price"], json!(19.5));
    assert_eq!(updated["created"], created);

    // Update of an unknown id → 404.
    let response = send(
        &app,
        "PUT",
        "/products/999999",
        Some(json!({
            "name": "Ghost",
            "category_id": category_id,
            "quantity": 0.0,
            "price": 0.0,
            "details": ""
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Delete returns the pre-delete snapshot.
    let response = send(&app, "DELETE", &format!("/products/{product_id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let snapshot = body_json(response).await;
    assert_eq!(snapshot["name"], "Sledgehammer");
    assert_eq!(snapshot["created"], created);

    // Gone afterwards.
    let response = send(&app, "GET", &format!("/products/{product_id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", &format!("/products/{product_id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
