use crate::entities::product::Entity as Product;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One line item of an anonymous cart. `session_id` is a client-generated
/// opaque token, deliberately not a foreign key to any user record.
///
/// Invariant: at most one row per (session_id, product_id); enforced by a
/// unique index created in [`super::setup_schema`] so concurrent adds
/// collapse into a single upsert instead of duplicating rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub session_id: String,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Product",
        from = "crate::entities::cart_item::Column::ProductId",
        to = "crate::entities::product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Product,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<crate::entities::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}
