pub mod auth;
pub mod cart;
pub mod category;
pub mod hero_slide;
pub mod product;
pub mod subcategory;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use auth::auth_router;
use cart::cart_router;
use category::category_router;
use hero_slide::hero_slide_router;
use product::product_router;
use subcategory::subcategory_router;

pub fn public_api_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .nest("/", auth_router(db.clone()))
        .nest("/", cart_router(db.clone()))
        .nest("/", category_router(db.clone()))
        .nest("/", subcategory_router(db.clone()))
        .nest("/", product_router(db.clone()))
        .nest("/", hero_slide_router(db.clone()))
}
