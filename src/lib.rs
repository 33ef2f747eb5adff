//! Server-rendered online shop.
//!
//! Every request flows through the ordered stage list declared in [`pipeline`]
//! before reaching one of the route groups in [`controller`]. Errors raised by
//! any stage or handler are funneled into a single HTML error response by
//! [`error::Error`]'s `IntoResponse` implementation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod router;
pub mod service;
pub mod startup;
pub mod view;
