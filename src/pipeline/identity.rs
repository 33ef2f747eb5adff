//! Identity resolution stage.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::{
    data::account::AccountRepository,
    error::Error,
    model::{app::AppState, request::Identity, session::SessionUserId},
};

/// Resolves the account the session is logged in as into an [`Identity`].
///
/// # Outcomes
/// - No account id in the session: `Identity(None)`, no lookup is made
/// - Account found: `Identity(Some(account))`
/// - Account no longer exists: `Identity(None)`, the request continues unauthenticated
/// - Lookup failed: the error skips the rest of the pipeline
pub async fn resolve_identity(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let identity = match SessionUserId::get(&session).await? {
        None => Identity(None),
        Some(account_id) => {
            let account = AccountRepository::new(&state.db)
                .get_by_id(account_id)
                .await?;

            if account.is_none() {
                tracing::debug!(
                    "Session references account ID {} which no longer exists",
                    account_id
                );
            }

            Identity(account)
        }
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
