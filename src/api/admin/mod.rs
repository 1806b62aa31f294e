pub mod category;
pub mod hero_slide;
pub mod product;
pub mod subcategory;
pub mod user;

use axum::{middleware::from_fn_with_state, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use category::admin_category_router;
use hero_slide::admin_hero_slide_router;
use product::admin_product_router;
use subcategory::admin_subcategory_router;
use user::admin_user_router;

use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};

pub fn admin_api_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .nest("/", admin_product_router(db.clone()))
        .nest("/", admin_category_router(db.clone()))
        .nest("/", admin_subcategory_router(db.clone()))
        .nest("/", admin_hero_slide_router(db.clone()))
        .nest("/", admin_user_router(db.clone()))
        .layer(from_fn_with_state(
            AuthState {
                db: db.clone(),
                role: Role::Admin,
            },
            auth_middleware,
        ))
}
