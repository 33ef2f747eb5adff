//! Database access layer.
//!
//! Repositories wrap the SeaORM queries for one table each and return the raw
//! [`sea_orm::DbErr`]; callers decide how a failure is surfaced.

pub mod account;
pub mod product;
pub mod session;
