use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cart::{cart_count, cart_total, CartLine};
use crate::entities::{
    cart_item::{self, Entity as CartItemEntity},
    product::{self, Entity as ProductEntity},
};
use crate::error::ApiError;

//ROUTERS
pub fn cart_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/cart", post(add_to_cart))
        .route(
            "/cart/:id",
            get(get_cart).patch(update_quantity).delete(remove_item),
        )
        .route("/cart/:id/summary", get(get_cart_summary))
        .route("/cart/session/:id", delete(clear_session))
        .layer(Extension(db))
}

//ROUTES
async fn get_cart(
    Path(session_id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<cart_item::Model>>, ApiError> {
    let items = CartItemEntity::find()
        .filter(cart_item::Column::SessionId.eq(&session_id))
        .all(&*db)
        .await?;

    Ok(Json(items))
}

/// Accumulate-on-add upsert. The insert and the quantity increment are a
/// single statement riding on the (session_id, product_id) unique index,
/// so two tabs adding the same product at once can never produce two rows.
async fn add_to_cart(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<AddToCart>,
) -> Result<Response, ApiError> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity <= 0 {
        return Err(ApiError::Validation(
            "Quantity must be greater than 0".to_string(),
        ));
    }

    let txn = db.begin().await?;

    ProductEntity::find_by_id(payload.product_id)
        .one(&txn)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No product with {} id was found",
                payload.product_id
            ))
        })?;

    let new_item = cart_item::ActiveModel {
        session_id: Set(payload.session_id.clone()),
        product_id: Set(payload.product_id),
        quantity: Set(quantity),
        ..Default::default()
    };
    let on_conflict = OnConflict::columns([
        cart_item::Column::SessionId,
        cart_item::Column::ProductId,
    ])
    .value(
        cart_item::Column::Quantity,
        Expr::col(cart_item::Column::Quantity).add(quantity),
    )
    .to_owned();

    CartItemEntity::insert(new_item)
        .on_conflict(on_conflict)
        .exec(&txn)
        .await?;

    let item = CartItemEntity::find()
        .filter(cart_item::Column::SessionId.eq(&payload.session_id))
        .filter(cart_item::Column::ProductId.eq(payload.product_id))
        .one(&txn)
        .await?
        .ok_or(ApiError::Unexpected)?;

    txn.commit().await?;

    // quantity landed on the requested value only when the row is new;
    // an existing row ends up strictly above it.
    let status = if item.quantity == quantity {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(item)).into_response())
}

async fn update_quantity(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<UpdateQuantity>,
) -> Result<Response, ApiError> {
    let txn = db.begin().await?;

    let item = CartItemEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Cart item not found".to_string()))?;

    if payload.quantity <= 0 {
        let item: cart_item::ActiveModel = item.into();
        item.delete(&txn).await?;
        txn.commit().await?;
        return Ok((
            StatusCode::OK,
            Json(json!({ "message": "Item removed from cart" })),
        )
            .into_response());
    }

    let mut item: cart_item::ActiveModel = item.into();
    item.quantity = Set(payload.quantity);
    let updated = item.update(&txn).await?;
    txn.commit().await?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// Idempotent: deleting an id that is already gone is a success, not an
/// error.
async fn remove_item(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<impl IntoResponse, ApiError> {
    CartItemEntity::delete_by_id(id).exec(&*db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Item removed from cart" })),
    ))
}

/// Idempotent: clearing an empty or unknown session is a success.
async fn clear_session(
    Path(session_id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<impl IntoResponse, ApiError> {
    CartItemEntity::delete_many()
        .filter(cart_item::Column::SessionId.eq(&session_id))
        .exec(&*db)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Cart cleared successfully" })),
    ))
}

async fn get_cart_summary(
    Path(session_id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<CartSummary>, ApiError> {
    let items = CartItemEntity::find()
        .filter(cart_item::Column::SessionId.eq(&session_id))
        .all(&*db)
        .await?;

    let product_ids: Vec<i32> = items.iter().map(|item| item.product_id).collect();
    let products: HashMap<i32, product::Model> = ProductEntity::find()
        .filter(product::Column::Id.is_in(product_ids))
        .all(&*db)
        .await?
        .into_iter()
        .map(|prod| (prod.id, prod))
        .collect();

    // Lines whose product has since been deleted are dropped, the same
    // way the storefront drops them when joining client-side.
    let lines: Vec<CartLine> = items
        .into_iter()
        .filter_map(|item| {
            products.get(&item.product_id).map(|prod| CartLine {
                id: item.id,
                product: prod.clone(),
                quantity: item.quantity,
            })
        })
        .collect();

    let summary = CartSummary {
        cart_count: cart_count(&lines),
        cart_total: cart_total(&lines).to_string(),
        items: lines,
    };
    Ok(Json(summary))
}

//Structs
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AddToCart {
    session_id: String,
    product_id: i32,
    quantity: Option<i32>,
}

#[derive(Deserialize)]
struct UpdateQuantity {
    quantity: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartSummary {
    items: Vec<CartLine>,
    cart_count: i64,
    cart_total: String,
}
