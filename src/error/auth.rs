//! CSRF verification errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::request::ViewLocals, view};

/// Errors rejecting a state-changing request that failed CSRF verification.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no CSRF token in its form fields or headers.
    #[error("CSRF token is missing from the request")]
    CsrfTokenMissing,
    /// The request's CSRF token does not match the session's CSRF secret.
    #[error("CSRF token does not match the session")]
    CsrfValidationFailed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        view::error_page(StatusCode::FORBIDDEN, &ViewLocals::default())
    }
}
