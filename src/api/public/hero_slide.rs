use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use std::sync::Arc;

use crate::entities::hero_slide::{self, Entity as HeroSlideEntity};
use crate::error::ApiError;

pub fn hero_slide_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/hero-slides", get(get_hero_slides))
        .route("/hero-slides/:id", get(get_hero_slide))
        .layer(Extension(db))
}

async fn get_hero_slides(
    Query(params): Query<GetHeroSlidesQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<hero_slide::Model>>, ApiError> {
    let mut query = HeroSlideEntity::find().order_by_desc(hero_slide::Column::Order);

    if params.active == Some(true) {
        query = query.filter(hero_slide::Column::IsActive.eq(true));
    }

    let slides = query.all(&*db).await?;
    Ok(Json(slides))
}

async fn get_hero_slide(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<hero_slide::Model>, ApiError> {
    let slide = HeroSlideEntity::find_by_id(id)
        .one(&*db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hero slide not found".to_string()))?;

    Ok(Json(slide))
}

//Structs
#[derive(Deserialize)]
struct GetHeroSlidesQuery {
    active: Option<bool>,
}
