mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{admin_token, create_category, create_product, spawn_app};

#[tokio::test]
async fn catalog_filters_combine() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &base).await;

    let fruits = create_category(&client, &base, &token, "Fruits", "fruits").await;
    let dairy = create_category(&client, &base, &token, "Dairy", "dairy").await;

    let response = client
        .post(format!("{base}/api/admin/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Organic Apples",
            "slug": "organic-apples",
            "description": "Crisp and sweet",
            "price": "4.99",
            "image": "https://example.com/apples.jpg",
            "categoryId": fruits,
            "featured": true,
            "bestSeller": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    create_product(&client, &base, &token, dairy, "fresh-milk", "3.49", None).await;

    let all = client
        .get(format!("{base}/api/products"))
        .send()
        .await
        .unwrap()
        .json::<Vec<Value>>()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let featured = client
        .get(format!("{base}/api/products?featured=true"))
        .send()
        .await
        .unwrap()
        .json::<Vec<Value>>()
        .await
        .unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["slug"], "organic-apples");

    let dairy_only = client
        .get(format!("{base}/api/products?category={dairy}"))
        .send()
        .await
        .unwrap()
        .json::<Vec<Value>>()
        .await
        .unwrap();
    assert_eq!(dairy_only.len(), 1);
    assert_eq!(dairy_only[0]["slug"], "fresh-milk");

    // featured AND bestSeller narrows to the apples; dairy has neither.
    let both = client
        .get(format!(
            "{base}/api/products?featured=true&bestSeller=true&category={dairy}"
        ))
        .send()
        .await
        .unwrap()
        .json::<Vec<Value>>()
        .await
        .unwrap();
    assert!(both.is_empty());
}

#[tokio::test]
async fn slug_lookup_and_missing_ids() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &base).await;

    let category = create_category(&client, &base, &token, "Fruits", "fruits").await;
    let id = create_product(&client, &base, &token, category, "organic-apples", "4.99", None).await;

    let by_slug = client
        .get(format!("{base}/api/products/slug/organic-apples"))
        .send()
        .await
        .unwrap();
    assert_eq!(by_slug.status(), StatusCode::OK);
    assert_eq!(by_slug.json::<Value>().await.unwrap()["id"], id);

    let missing = client
        .get(format!("{base}/api/products/999999"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let missing_slug = client
        .get(format!("{base}/api/products/slug/not-a-product"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_slug.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_can_patch_and_delete() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &base).await;

    let category = create_category(&client, &base, &token, "Fruits", "fruits").await;
    let id = create_product(&client, &base, &token, category, "organic-apples", "4.99", None).await;

    let patched = client
        .patch(format!("{base}/api/admin/products/{id}"))
        .bearer_auth(&token)
        .json(&json!({ "price": "3.99", "originalPrice": "4.99", "inStock": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(patched.status(), StatusCode::OK);
    let body = patched.json::<Value>().await.unwrap();
    assert_eq!(body["price"], "3.99");
    assert_eq!(body["originalPrice"], "4.99");
    assert_eq!(body["inStock"], false);

    let deleted = client
        .delete(format!("{base}/api/admin/products/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = client
        .get(format!("{base}/api/products/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let delete_again = client
        .delete(format!("{base}/api/admin/products/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(delete_again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_slug_conflicts_and_unknown_category_404s() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let token = admin_token(&client, &base).await;

    let category = create_category(&client, &base, &token, "Fruits", "fruits").await;
    create_product(&client, &base, &token, category, "organic-apples", "4.99", None).await;

    let duplicate = client
        .post(format!("{base}/api/admin/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Apples again",
            "slug": "organic-apples",
            "description": "duplicate",
            "price": "5.99",
            "image": "https://example.com/apples.jpg",
            "categoryId": category
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let bad_category = client
        .post(format!("{base}/api/admin/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Lost product",
            "slug": "lost-product",
            "description": "no category",
            "price": "1.00",
            "image": "https://example.com/lost.jpg",
            "categoryId": 999999
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_category.status(), StatusCode::NOT_FOUND);
}
