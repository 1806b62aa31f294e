use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use std::sync::Arc;

use crate::entities::subcategory::{self, Entity as SubcategoryEntity};
use crate::error::ApiError;

pub fn subcategory_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/subcategories", get(get_subcategories))
        .route("/subcategories/:id", get(get_subcategory))
        .layer(Extension(db))
}

async fn get_subcategories(
    Query(params): Query<GetSubcategoriesQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<subcategory::Model>>, ApiError> {
    let mut query = SubcategoryEntity::find();

    if let Some(category_id) = params.category_id {
        query = query.filter(subcategory::Column::CategoryId.eq(category_id));
    }

    let subcategories = query.all(&*db).await?;
    Ok(Json(subcategories))
}

async fn get_subcategory(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<subcategory::Model>, ApiError> {
    let subcategory = SubcategoryEntity::find_by_id(id)
        .one(&*db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subcategory not found".to_string()))?;

    Ok(Json(subcategory))
}

//Structs
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetSubcategoriesQuery {
    category_id: Option<i32>,
}
