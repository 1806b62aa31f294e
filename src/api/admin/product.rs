use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, RuntimeErr, Set, TransactionTrait,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::entities::{
    category,
    product::{self, Entity as ProductEntity},
};
use crate::error::ApiError;

//ROUTERS
pub fn admin_product_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/products", post(create_product))
        .route(
            "/products/:id",
            axum::routing::patch(patch_product).delete(delete_product),
        )
        .layer(Extension(db))
}

//ROUTES
async fn create_product(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    category::Entity::find_by_id(payload.category_id)
        .one(&txn)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No category with {} id was found",
                payload.category_id
            ))
        })?;

    let new_product = product::ActiveModel {
        name: Set(payload.name),
        slug: Set(payload.slug),
        description: Set(payload.description),
        price: Set(payload.price),
        original_price: Set(payload.original_price),
        image: Set(payload.image),
        category_id: Set(payload.category_id),
        featured: Set(payload.featured.unwrap_or_default()),
        best_seller: Set(payload.best_seller.unwrap_or_default()),
        new_arrival: Set(payload.new_arrival.unwrap_or_default()),
        in_stock: Set(payload.in_stock.unwrap_or(true)),
        rating: Set(payload.rating),
        review_count: Set(payload.review_count.unwrap_or_default()),
        ..Default::default()
    };

    let created = new_product.insert(&txn).await.map_err(unique_slug_err)?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn patch_product(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let existing = ProductEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    let mut prod: product::ActiveModel = existing.into();

    if let Some(name) = payload.name {
        prod.name = Set(name);
    }
    if let Some(slug) = payload.slug {
        prod.slug = Set(slug);
    }
    if let Some(description) = payload.description {
        prod.description = Set(description);
    }
    if let Some(price) = payload.price {
        prod.price = Set(price);
    }
    if let Some(original_price) = payload.original_price {
        prod.original_price = Set(Some(original_price));
    }
    if let Some(image) = payload.image {
        prod.image = Set(image);
    }
    if let Some(category_id) = payload.category_id {
        category::Entity::find_by_id(category_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("No category with {category_id} id was found"))
            })?;
        prod.category_id = Set(category_id);
    }
    if let Some(featured) = payload.featured {
        prod.featured = Set(featured);
    }
    if let Some(best_seller) = payload.best_seller {
        prod.best_seller = Set(best_seller);
    }
    if let Some(new_arrival) = payload.new_arrival {
        prod.new_arrival = Set(new_arrival);
    }
    if let Some(in_stock) = payload.in_stock {
        prod.in_stock = Set(in_stock);
    }
    if let Some(rating) = payload.rating {
        prod.rating = Set(Some(rating));
    }
    if let Some(review_count) = payload.review_count {
        prod.review_count = Set(review_count);
    }

    let updated = prod.update(&txn).await.map_err(unique_slug_err)?;
    txn.commit().await?;

    Ok(Json(updated))
}

async fn delete_product(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let prod = ProductEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    let prod: product::ActiveModel = prod.into();
    prod.delete(&txn).await?;
    txn.commit().await?;

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

fn unique_slug_err(err: DbErr) -> ApiError {
    match &err {
        DbErr::Query(RuntimeErr::SqlxError(_)) | DbErr::Exec(RuntimeErr::SqlxError(_))
            if err.to_string().contains("UNIQUE") =>
        {
            ApiError::Conflict("A product with this slug already exists".to_string())
        }
        _ => ApiError::Db(err),
    }
}

//Structs
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct CreateProduct {
    name: String,
    slug: String,
    description: String,
    price: String,
    original_price: Option<String>,
    image: String,
    category_id: i32,
    featured: Option<bool>,
    best_seller: Option<bool>,
    new_arrival: Option<bool>,
    in_stock: Option<bool>,
    rating: Option<String>,
    review_count: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatchProduct {
    name: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    price: Option<String>,
    original_price: Option<String>,
    image: Option<String>,
    category_id: Option<i32>,
    featured: Option<bool>,
    best_seller: Option<bool>,
    new_arrival: Option<bool>,
    in_stock: Option<bool>,
    rating: Option<String>,
    review_count: Option<i32>,
}
