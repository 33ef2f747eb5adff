//! View locals stage.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        request::{CsrfToken, ViewLocals},
        session::SessionLoggedIn,
    },
};

/// Projects the values every view reads into [`ViewLocals`].
///
/// `is_authenticated` mirrors the session's logged in flag and is `false` for
/// sessions that never logged in. `csrf_token` is the token issued by the CSRF
/// stage for this request.
pub async fn project_view_locals(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let is_authenticated = SessionLoggedIn::get(&session).await?;
    let CsrfToken(csrf_token) = request
        .extensions()
        .get::<CsrfToken>()
        .cloned()
        .unwrap_or_default();

    request.extensions_mut().insert(ViewLocals {
        is_authenticated,
        csrf_token,
    });

    Ok(next.run(request).await)
}
