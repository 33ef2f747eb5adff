//! Helpers shared by route handlers.

pub mod csrf;
