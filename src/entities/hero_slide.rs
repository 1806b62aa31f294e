use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Promotional banner content. Pure display data; nothing in the cart or
/// catalog depends on it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "hero_slides")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    #[sea_orm(default = 0)]
    pub order: i32,
    #[sea_orm(default = true)]
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
