pub mod cart_item;
pub mod category;
pub mod hero_slide;
pub mod product;
pub mod subcategory;
pub mod user;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::sea_query::Index;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema, Set,
};
use tracing::info;

use crate::entities::{
    cart_item::Entity as CartItem, category::Entity as Category, hero_slide::Entity as HeroSlide,
    product::Entity as Product, subcategory::Entity as Subcategory, user::Entity as User,
};

/// Creates every table plus the composite unique index backing the cart
/// upsert. Safe to call on every startup.
pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let create_category_table = schema
        .create_table_from_entity(Category)
        .if_not_exists()
        .to_owned();
    let create_subcategory_table = schema
        .create_table_from_entity(Subcategory)
        .if_not_exists()
        .to_owned();
    let create_product_table = schema
        .create_table_from_entity(Product)
        .if_not_exists()
        .to_owned();
    let create_cart_table = schema
        .create_table_from_entity(CartItem)
        .if_not_exists()
        .to_owned();
    let create_hero_slide_table = schema
        .create_table_from_entity(HeroSlide)
        .if_not_exists()
        .to_owned();
    let create_user_table = schema
        .create_table_from_entity(User)
        .if_not_exists()
        .to_owned();

    db.execute(backend.build(&create_category_table)).await?;
    db.execute(backend.build(&create_subcategory_table)).await?;
    db.execute(backend.build(&create_product_table)).await?;
    db.execute(backend.build(&create_cart_table)).await?;
    db.execute(backend.build(&create_hero_slide_table)).await?;
    db.execute(backend.build(&create_user_table)).await?;

    // One line item per (session, product); concurrent adds for the same
    // pair hit this index and fold into a quantity increment.
    let cart_unique_index = Index::create()
        .name("idx_cart_items_session_product")
        .table(CartItem)
        .col(cart_item::Column::SessionId)
        .col(cart_item::Column::ProductId)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&cart_unique_index)).await?;

    Ok(())
}

/// Seeds the default admin account when the users table is empty, so a
/// fresh deployment has a way into `/api/admin`.
pub async fn seed_admin(db: &DatabaseConnection) -> Result<(), DbErr> {
    if User::find().count(db).await? > 0 {
        return Ok(());
    }

    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@grogin.dev".to_string());
    let password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "grogin-admin".to_string());

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| DbErr::Custom(format!("Failed to hash admin password: {err}")))?
        .to_string();

    let admin = user::ActiveModel {
        email: Set(email.clone()),
        password: Set(password_hash),
        role: Set(user::Role::Admin),
        ..Default::default()
    };
    User::insert(admin).exec(db).await?;

    info!(email = %email, "Seeded default admin account");
    Ok(())
}
