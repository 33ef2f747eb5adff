//! CSRF verification for state-changing requests.

use axum::http::HeaderMap;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{request::FormFields, session::SessionCsrfSecret},
    pipeline::csrf::verify_token,
};

/// Form field carrying the CSRF token.
pub const CSRF_FORM_FIELD: &str = "_csrf";

/// Headers accepted as an alternative to the form field.
pub const CSRF_HEADERS: [&str; 2] = ["csrf-token", "x-csrf-token"];

/// Validate that the request carries a CSRF token issued for this session.
/// Returns `Ok(())` when valid or the appropriate `Error` otherwise.
pub async fn validate_csrf(
    session: &Session,
    headers: &HeaderMap,
    fields: &FormFields,
) -> Result<(), Error> {
    let token = fields.get(CSRF_FORM_FIELD).or_else(|| {
        CSRF_HEADERS
            .iter()
            .find_map(|name| headers.get(*name).and_then(|value| value.to_str().ok()))
    });

    let Some(token) = token else {
        return Err(Error::AuthError(AuthError::CsrfTokenMissing));
    };

    match SessionCsrfSecret::get(session).await? {
        Some(secret) if verify_token(&secret, token) => Ok(()),
        _ => Err(Error::AuthError(AuthError::CsrfValidationFailed)),
    }
}
