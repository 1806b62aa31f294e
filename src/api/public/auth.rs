use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::user::{self, Entity as UserEntity, Role};
use crate::error::ApiError;
use crate::middleware::auth::generate_token;

pub fn auth_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .layer(Extension(db))
}

async fn signup(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<SignupPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|err| ApiError::Validation(err.to_string()))?;

    let txn = db.begin().await?;

    let existing = UserEntity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    let new_user = user::ActiveModel {
        email: Set(payload.email),
        password: Set(hash_password(&payload.password)?),
        role: Set(Role::Customer),
        ..Default::default()
    };
    UserEntity::insert(new_user).exec(&txn).await?;
    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

async fn login(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserEntity::find()
        .filter(user::Column::Email.eq(&payload.email))
        .one(&*db)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    user.check_hash(&payload.password)
        .map_err(|_| ApiError::Unauthorized)?;

    let token =
        generate_token(user.id, user.role.to_string()).map_err(|_| ApiError::Unexpected)?;

    Ok(Json(json!({
        "token": token,
        "user": {
            "id": user.id,
            "email": user.email,
            "role": user.role,
        }
    })))
}

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ApiError::Unexpected)
}

//Structs
#[derive(Deserialize, Debug, Validate)]
struct SignupPayload {
    #[validate(email(message = "Invalid email address"))]
    email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    password: String,
}

#[derive(Deserialize)]
struct LoginPayload {
    email: String,
    password: String,
}
