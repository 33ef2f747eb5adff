//! HTTP route handlers, grouped the way they are mounted by [`crate::router`].
//!
//! Handlers read the values attached by the pipeline (`FormFields`,
//! `UploadedFile`, `Flash`, `ViewLocals`, `Identity`) as request extensions.

pub mod admin;
pub mod auth;
pub mod error;
pub mod shop;
pub mod util;
