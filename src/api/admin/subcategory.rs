use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::entities::{
    category,
    subcategory::{self, Entity as SubcategoryEntity},
};
use crate::error::ApiError;

pub fn admin_subcategory_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/subcategories", post(create_subcategory))
        .route(
            "/subcategories/:id",
            patch(patch_subcategory).delete(delete_subcategory),
        )
        .layer(Extension(db))
}

async fn create_subcategory(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateSubcategory>,
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

    let new_subcategory = subcategory::ActiveModel {
        name: Set(payload.name),
        slug: Set(payload.slug),
        category_id: Set(payload.category_id),
        ..Default::default()
    };

    let created = new_subcategory.insert(&txn).await.map_err(|_| {
        ApiError::Conflict("A subcategory with this slug already exists".to_string())
    })?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn patch_subcategory(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchSubcategory>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let existing = SubcategoryEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subcategory not found".to_string()))?;

    let mut subcateg: subcategory::ActiveModel = existing.into();

    if let Some(name) = payload.name {
        subcateg.name = Set(name);
    }
    if let Some(slug) = payload.slug {
        subcateg.slug = Set(slug);
    }
    if let Some(category_id) = payload.category_id {
        category::Entity::find_by_id(category_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("No category with {category_id} id was found"))
            })?;
        subcateg.category_id = Set(category_id);
    }

    let updated = subcateg.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(updated))
}

async fn delete_subcategory(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let subcateg = SubcategoryEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subcategory not found".to_string()))?;

    let subcateg: subcategory::ActiveModel = subcateg.into();
    subcateg.delete(&txn).await?;
    txn.commit().await?;

    Ok(Json(json!({ "message": "Subcategory deleted successfully" })))
}

//Structs
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CreateSubcategory {
    name: String,
    slug: String,
    category_id: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatchSubcategory {
    name: Option<String>,
    slug: Option<String>,
    category_id: Option<i32>,
}
