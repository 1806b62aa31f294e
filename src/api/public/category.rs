use axum::{
    extract::{Extension, Path},
    routing::get,
    Json, Router,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::entities::category::{self, Entity as CategoryEntity};
use crate::error::ApiError;

pub fn category_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/:id", get(get_category))
        .layer(Extension(db))
}

async fn get_categories(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<category::Model>>, ApiError> {
    let categories = CategoryEntity::find().all(&*db).await?;
    Ok(Json(categories))
}

async fn get_category(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<category::Model>, ApiError> {
    let category = CategoryEntity::find_by_id(id)
        .one(&*db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    Ok(Json(category))
}
