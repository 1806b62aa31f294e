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

use crate::entities::category::{self, Entity as CategoryEntity};
use crate::error::ApiError;

pub fn admin_category_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/categories", post(create_category))
        .route(
            "/categories/:id",
            patch(patch_category).delete(delete_category),
        )
        .layer(Extension(db))
}

async fn create_category(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateCategory>,
) -> Result<impl IntoResponse, ApiError> {
    let new_category = category::ActiveModel {
        name: Set(payload.name),
        slug: Set(payload.slug),
        icon: Set(payload.icon),
        ..Default::default()
    };

    let created = new_category
        .insert(&*db)
        .await
        .map_err(|_| ApiError::Conflict("A category with this slug already exists".to_string()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn patch_category(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchCategory>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let existing = CategoryEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    let mut categ: category::ActiveModel = existing.into();

    if let Some(name) = payload.name {
        categ.name = Set(name);
    }
    if let Some(slug) = payload.slug {
        categ.slug = Set(slug);
    }
    if let Some(icon) = payload.icon {
        categ.icon = Set(Some(icon));
    }

    let updated = categ.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(updated))
}

async fn delete_category(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let categ = CategoryEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    let categ: category::ActiveModel = categ.into();
    categ.delete(&txn).await?;
    txn.commit().await?;

    Ok(Json(json!({ "message": "Category deleted successfully" })))
}

//Structs
#[derive(Deserialize, Debug)]
struct CreateCategory {
    name: String,
    slug: String,
    icon: Option<String>,
}

#[derive(Deserialize)]
struct PatchCategory {
    name: Option<String>,
    slug: Option<String>,
    icon: Option<String>,
}
