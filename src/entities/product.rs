use crate::entities::category::Entity as Category;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Catalog product. Prices are stored as decimal strings so money never
/// touches floating point on its way to or from the client.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub image: String,
    pub category_id: i32,
    #[sea_orm(default = false)]
    pub featured: bool,
    #[sea_orm(default = false)]
    pub best_seller: bool,
    #[sea_orm(default = false)]
    pub new_arrival: bool,
    #[sea_orm(default = true)]
    pub in_stock: bool,
    pub rating: Option<String>,
    #[sea_orm(default = 0)]
    pub review_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Category",
        from = "crate::entities::product::Column::CategoryId",
        to = "crate::entities::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<crate::entities::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}
