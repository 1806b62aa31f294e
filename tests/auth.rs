mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{admin_token, spawn_app};

#[tokio::test]
async fn signup_then_login() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let signup = client
        .post(format!("{base}/api/signup"))
        .json(&json!({ "email": "shopper@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    assert_eq!(signup.status(), StatusCode::CREATED);

    let login = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": "shopper@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);

    let body = login.json::<Value>().await.unwrap();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"], "shopper@example.com");
    assert_eq!(body["user"]["role"], "customer");
}

#[tokio::test]
async fn signup_rejects_bad_input_and_duplicates() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let bad_email = client
        .post(format!("{base}/api/signup"))
        .json(&json!({ "email": "not-an-email", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);

    let short_password = client
        .post(format!("{base}/api/signup"))
        .json(&json!({ "email": "shopper@example.com", "password": "short" }))
        .send()
        .await
        .unwrap();
    assert_eq!(short_password.status(), StatusCode::BAD_REQUEST);

    let first = client
        .post(format!("{base}/api/signup"))
        .json(&json!({ "email": "shopper@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let duplicate = client
        .post(format!("{base}/api/signup"))
        .json(&json!({ "email": "shopper@example.com", "password": "different-pass" }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_rejects_wrong_credentials() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let unknown = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": "nobody@example.com", "password": "whatever1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    let wrong_password = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": "admin@grogin.dev", "password": "not-the-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_surface_requires_an_admin_token() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let no_token = client
        .post(format!("{base}/api/admin/categories"))
        .json(&json!({ "name": "Fruits", "slug": "fruits" }))
        .send()
        .await
        .unwrap();
    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);

    // A customer token is not enough.
    client
        .post(format!("{base}/api/signup"))
        .json(&json!({ "email": "shopper@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    let login = client
        .post(format!("{base}/api/login"))
        .json(&json!({ "email": "shopper@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap();
    let customer_token = login.json::<Value>().await.unwrap()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let customer = client
        .post(format!("{base}/api/admin/categories"))
        .bearer_auth(&customer_token)
        .json(&json!({ "name": "Fruits", "slug": "fruits" }))
        .send()
        .await
        .unwrap();
    assert_eq!(customer.status(), StatusCode::UNAUTHORIZED);

    let token = admin_token(&client, &base).await;
    let admin = client
        .post(format!("{base}/api/admin/categories"))
        .bearer_auth(&token)
        .json(&json!({ "name": "Fruits", "slug": "fruits" }))
        .send()
        .await
        .unwrap();
    assert_eq!(admin.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn admin_manages_users() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &base).await;

    let created = client
        .post(format!("{base}/api/admin/users"))
        .bearer_auth(&token)
        .json(&json!({ "email": "staff@grogin.dev", "password": "longenough", "role": "admin" }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = created.json::<Value>().await.unwrap();
    assert_eq!(body["role"], "admin");
    assert!(body.get("password").is_none());
    let user_id = body["id"].as_i64().unwrap();

    let listed = client
        .get(format!("{base}/api/admin/users"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json::<Vec<Value>>()
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);

    let demoted = client
        .patch(format!("{base}/api/admin/users/{user_id}"))
        .bearer_auth(&token)
        .json(&json!({ "role": "customer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(demoted.status(), StatusCode::OK);
    assert_eq!(demoted.json::<Value>().await.unwrap()["role"], "customer");

    let deleted = client
        .delete(format!("{base}/api/admin/users/{user_id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
}
