//! Grocery storefront backend: catalog, anonymous session-keyed cart,
//! hero banners and an admin surface, served as a REST JSON API.

pub mod api;
pub mod cart;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod session;

pub use api::create_api_router;
pub use entities::{seed_admin, setup_schema};
