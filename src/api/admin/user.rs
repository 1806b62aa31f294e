use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::api::public::auth::hash_password;
use crate::entities::user::{self, Entity as UserEntity, Role};
use crate::error::ApiError;

pub fn admin_user_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/:id",
            axum::routing::patch(patch_user).delete(delete_user),
        )
        .layer(Extension(db))
}

async fn get_users(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = UserEntity::find().all(&*db).await?;
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

async fn create_user(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateUser>,
) -> Result<impl IntoResponse, ApiError> {
    let new_user = user::ActiveModel {
        email: Set(payload.email),
        password: Set(hash_password(&payload.password)?),
        role: Set(payload.role),
        ..Default::default()
    };

    let created = new_user
        .insert(&*db)
        .await
        .map_err(|_| ApiError::Conflict("Email already exists".to_string()))?;

    Ok((StatusCode::CREATED, Json(UserView::from(created))))
}

async fn patch_user(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchUser>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let existing = UserEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let mut user: user::ActiveModel = existing.into();

    if let Some(email) = payload.email {
        user.email = Set(email);
    }
    if let Some(password) = payload.password {
        user.password = Set(hash_password(&password)?);
    }
    if let Some(role) = payload.role {
        user.role = Set(role);
    }

    let updated = user.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(UserView::from(updated)))
}

async fn delete_user(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<impl IntoResponse, ApiError> {
    let txn = db.begin().await?;

    let user = UserEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let user: user::ActiveModel = user.into();
    user.delete(&txn).await?;
    txn.commit().await?;

    Ok(Json(json!({ "message": "User deleted successfully" })))
}

//Structs
#[derive(Deserialize, Debug)]
struct CreateUser {
    email: String,
    password: String,
    role: Role,
}

#[derive(Deserialize)]
struct PatchUser {
    email: Option<String>,
    password: Option<String>,
    role: Option<Role>,
}

#[derive(Serialize)]
struct UserView {
    id: i32,
    email: String,
    role: Role,
}

impl From<user::Model> for UserView {
    fn from(value: user::Model) -> UserView {
        UserView {
            id: value.id,
            email: value.email,
            role: value.role,
        }
    }
}
