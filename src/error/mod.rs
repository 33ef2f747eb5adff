//! Error types for the shop server.
//!
//! Every pipeline stage and route handler returns `Result<_, Error>`. Returning
//! `Err` skips all remaining stages: the error is converted straight into the
//! response by the `IntoResponse` implementation below, which is the terminal
//! error stage of the request pipeline. It always produces an HTML error page.

pub mod auth;
pub mod config;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::FormRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::request::ViewLocals,
    view,
};

/// Main error type for the shop server.
///
/// Aggregates domain errors and library errors so they can be propagated with
/// `?`. Only technical failures and malformed requests end up here; outcomes
/// such as a rejected upload or a missing login are handled as normal control
/// flow by the stages and handlers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// CSRF verification failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the shop's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Password hashing or hash parsing failure.
    #[error("Failed to process password hash: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session load, save or (de)serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Filesystem error while storing or removing uploads.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Malformed URL-encoded request body.
    #[error(transparent)]
    FormRejection(#[from] FormRejection),
    /// Multipart request body could not be read.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),
    /// Multipart field could not be read.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
    /// View template failed to render.
    #[error(transparent)]
    TemplateError(#[from] askama::Error),
}

/// Converts application errors into HTML error pages.
///
/// # Returns
/// - 400 (or the rejection's own status) - malformed form or multipart body
/// - 403 Forbidden - CSRF verification failure
/// - 500 Internal Server Error - everything else, logged at `error` level
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FormRejection(rejection) => {
                BadRequest(rejection.status(), rejection).into_response()
            }
            Self::MultipartRejection(rejection) => {
                BadRequest(rejection.status(), rejection).into_response()
            }
            Self::MultipartError(err) => BadRequest(err.status(), err).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error page.
///
/// The full error is logged; the page only shows a generic message so no
/// implementation details leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        view::error_page(StatusCode::INTERNAL_SERVER_ERROR, &ViewLocals::default())
    }
}

/// Wrapper type for request errors caused by the client, rendered with the given status.
struct BadRequest<E>(StatusCode, E);

impl<E: std::fmt::Display> IntoResponse for BadRequest<E> {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected malformed request: {}", self.1);

        view::error_page(self.0, &ViewLocals::default())
    }
}
