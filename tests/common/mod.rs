use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use std::sync::Arc;

use grogin::{create_api_router, seed_admin, setup_schema};

/// Boots the full router against a fresh in-memory sqlite database on an
/// ephemeral port and returns the base URL. One connection keeps the
/// in-memory database alive for the whole test.
pub async fn spawn_app() -> String {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");
    setup_schema(&db).await.expect("Failed to create schema");
    seed_admin(&db).await.expect("Failed to seed admin");

    let app = create_api_router(Arc::new(db));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server died");
    });

    format!("http://{}", addr)
}

/// Logs in as the seeded admin and returns a bearer token.
pub async fn admin_token(client: &reqwest::Client, base: &str) -> String {
    let response = client
        .post(format!("{base}/api/login"))
        .json(&json!({
            "email": "admin@grogin.dev",
            "password": "grogin-admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse login response");
    body["token"]
        .as_str()
        .expect("Token not found in login response")
        .to_string()
}

#[allow(dead_code)]
pub async fn create_category(
    client: &reqwest::Client,
    base: &str,
    token: &str,
    name: &str,
    slug: &str,
) -> i64 {
    let response = client
        .post(format!("{base}/api/admin/categories"))
        .bearer_auth(token)
        .json(&json!({ "name": name, "slug": slug }))
        .send()
        .await
        .expect("Failed to send create category request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let body = response.json::<Value>().await.expect("Invalid JSON");
    body["id"].as_i64().expect("Category id missing")
}

#[allow(dead_code)]
pub async fn create_product(
    client: &reqwest::Client,
    base: &str,
    token: &str,
    category_id: i64,
    slug: &str,
    price: &str,
    original_price: Option<&str>,
) -> i64 {
    let response = client
        .post(format!("{base}/api/admin/products"))
        .bearer_auth(token)
        .json(&json!({
            "name": slug.replace('-', " "),
            "slug": slug,
            "description": "test product",
            "price": price,
            "originalPrice": original_price,
            "image": "https://example.com/image.jpg",
            "categoryId": category_id
        }))
        .send()
        .await
        .expect("Failed to send create product request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let body = response.json::<Value>().await.expect("Invalid JSON");
    body["id"].as_i64().expect("Product id missing")
}
