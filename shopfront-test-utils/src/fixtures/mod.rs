//! Test fixture modules for database record creation.
//!
//! - `account` - Accounts with a known password
//! - `product` - Products owned by an account
//! - `factory` - In-memory models without database interaction

pub mod account;
pub mod factory;
pub mod product;
