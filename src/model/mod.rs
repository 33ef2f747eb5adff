//! Shared types passed between the pipeline stages, services and handlers.

pub mod app;
pub mod db;
pub mod request;
pub mod session;
pub mod upload;
