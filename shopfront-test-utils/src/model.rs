//! Database model type aliases used by the fixtures.

pub type AccountModel = entity::account::Model;
pub type ProductModel = entity::product::Model;
