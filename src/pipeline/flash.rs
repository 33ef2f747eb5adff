//! Flash attachment stage.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::model::session::Flash;

/// Attaches a [`Flash`] handle over the request's session.
pub async fn attach_flash(session: Session, mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(Flash::new(session));

    next.run(request).await
}
