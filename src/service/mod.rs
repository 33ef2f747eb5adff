//! Service layer for business logic.
//!
//! Services combine repositories with the rest of the domain (password hashing,
//! stored uploads) so route handlers only translate between HTTP and services.

pub mod auth;
pub mod product;
