use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use std::sync::Arc;

use crate::entities::product::{self, Entity as ProductEntity};
use crate::error::ApiError;

pub fn product_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/products", get(get_products))
        .route("/products/:id", get(get_product))
        .route("/products/slug/:slug", get(get_product_by_slug))
        .layer(Extension(db))
}

async fn get_products(
    Query(params): Query<GetProductsQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<product::Model>>, ApiError> {
    let mut query = ProductEntity::find();

    if let Some(category_id) = params.category {
        query = query.filter(product::Column::CategoryId.eq(category_id));
    }
    if params.featured == Some(true) {
        query = query.filter(product::Column::Featured.eq(true));
    }
    if params.best_seller == Some(true) {
        query = query.filter(product::Column::BestSeller.eq(true));
    }
    if params.new_arrival == Some(true) {
        query = query.filter(product::Column::NewArrival.eq(true));
    }

    let products = query.all(&*db).await?;
    Ok(Json(products))
}

async fn get_product(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<product::Model>, ApiError> {
    let prod = ProductEntity::find_by_id(id)
        .one(&*db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(prod))
}

async fn get_product_by_slug(
    Path(slug): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<product::Model>, ApiError> {
    let prod = ProductEntity::find()
        .filter(product::Column::Slug.eq(&slug))
        .one(&*db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(prod))
}

//Structs
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetProductsQuery {
    category: Option<i32>,
    featured: Option<bool>,
    best_seller: Option<bool>,
    new_arrival: Option<bool>,
}
