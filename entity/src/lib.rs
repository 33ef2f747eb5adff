//! SeaORM entities for the shopfront database.

pub mod prelude;

pub mod account;
pub mod product;
pub mod shop_session;
