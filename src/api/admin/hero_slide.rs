use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::entities::hero_slide::{self, Entity as HeroSlideEntity};
use crate::error::ApiError;

// The slide manager reads back everything it writes, active or not, so
// this router carries its own unfiltered GETs.
pub fn admin_hero_slide_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/hero-slides", get(get_hero_slides).post(create_hero_slide))
        .route(
            "/hero-slides/:id",
            get(get_hero_slide)
                .patch(patch_hero_slide)
                .delete(delete_hero_slide),
        )
        .layer(Extension(db))
}

async fn get_hero_slides(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<hero_slide::Model>>, ApiError> {
    let slides = HeroSlideEntity::find()
        .order_by_desc(hero_slide::Column::Order)
        .all(&*db)
        .await?;

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

async fn create_hero_slide(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateHeroSlide>,
) -> Result<impl IntoResponse, ApiError> {
    let new_slide = hero_slide::ActiveModel {
        title: Set(payload.title),
        subtitle: Set(payload.subtitle),
        image: Set(payload.image),
        button_text: Set(payload.button_text),
        button_link: Set(payload.button_link),
        order: Set(payload.order.unwrap_or_default()),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    };

    let created = new_slide.insert(&*db).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn patch_hero_slide(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchHeroSlide>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let existing = HeroSlideEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hero slide not found".to_string()))?;

    let mut slide: hero_slide::ActiveModel = existing.into();

    if let Some(title) = payload.title {
        slide.title = Set(title);
    }
    if let Some(subtitle) = payload.subtitle {
        slide.subtitle = Set(Some(subtitle));
    }
    if let Some(image) = payload.image {
        slide.image = Set(image);
    }
    if let Some(button_text) = payload.button_text {
        slide.button_text = Set(Some(button_text));
    }
    if let Some(button_link) = payload.button_link {
        slide.button_link = Set(Some(button_link));
    }
    if let Some(order) = payload.order {
        slide.order = Set(order);
    }
    if let Some(is_active) = payload.is_active {
        slide.is_active = Set(is_active);
    }

    let updated = slide.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(updated))
}

async fn delete_hero_slide(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let slide = HeroSlideEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hero slide not found".to_string()))?;

    let slide: hero_slide::ActiveModel = slide.into();
    slide.delete(&txn).await?;
    txn.commit().await?;

    Ok(Json(json!({ "message": "Hero slide deleted successfully" })))
}

//Structs
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CreateHeroSlide {
    title: String,
    subtitle: Option<String>,
    image: String,
    button_text: Option<String>,
    button_link: Option<String>,
    order: Option<i32>,
    is_active: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatchHeroSlide {
    title: Option<String>,
    subtitle: Option<String>,
    image: Option<String>,
    button_text: Option<String>,
    button_link: Option<String>,
    order: Option<i32>,
    is_active: Option<bool>,
}
