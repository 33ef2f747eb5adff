//! Request pipeline applied to every incoming request.
//!
//! # Stage Order (first listed = first to see the request)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Body parsing (URL-encoded forms into [`FormFields`](crate::model::request::FormFields))
//! 3. Upload interception (multipart bodies, stores an accepted `image` file)
//! 4. Static assets (public directory and stored uploads)
//! 5. Session (tower-sessions over the durable store, signed cookie)
//! 6. CSRF token issuance
//! 7. Flash messages
//! 8. View locals (`is_authenticated`, `csrf_token`)
//! 9. Identity resolution
//!
//! After the last stage the router dispatches to the admin, shop and auth
//! routes or the not-found fallback. A stage or handler returning `Err` skips
//! everything after it and the error is rendered by the error stage
//! (`impl IntoResponse for Error`).

pub mod assets;
pub mod body;
pub mod csrf;
pub mod flash;
pub mod identity;
pub mod locals;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, SessionManagerLayer, SessionStore,
};

use crate::{model::app::AppState, pipeline::assets::StaticAssets};

/// Largest request body accepted, uploads included.
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Sessions expire after this long without a request.
pub const SESSION_INACTIVITY_EXPIRY: Duration = Duration::days(7);

/// Wraps `router` in the request pipeline.
///
/// # Arguments
/// - `router` - Routes with their state already provided
/// - `state` - Application state for the stages that need the database or upload storage
/// - `assets` - Static asset directories
/// - `store` - Session store backing the session stage
/// - `key` - Key the session cookie is signed with
pub fn apply<S>(router: Router, state: AppState, assets: StaticAssets, store: S, key: Key) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(store)
        .with_secure(!cfg!(debug_assertions))
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(SESSION_INACTIVITY_EXPIRY))
        .with_signed(key);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
            .layer(from_fn(body::parse_form_body))
            .layer(from_fn_with_state(
                state.uploads.clone(),
                upload::intercept_upload,
            ))
            .layer(from_fn_with_state(assets, assets::serve_static))
            .layer(session_layer)
            .layer(from_fn(csrf::issue_csrf_token))
            .layer(from_fn(flash::attach_flash))
            .layer(from_fn(locals::project_view_locals))
            .layer(from_fn_with_state(state, identity::resolve_identity)),
    )
}
