//! Helpers for driving the full application in integration tests.

pub mod request;

use std::sync::Arc;

use axum::{response::Response, Router};
use http_body_util::BodyExt;
use shopfront::{
    model::{
        app::AppState,
        session::{
            csrf::SESSION_CSRF_SECRET_KEY,
            user::{SESSION_LOGGED_IN_KEY, SESSION_USER_ID_KEY},
            SessionCsrfSecret, SessionLoggedIn, SessionUserId,
        },
    },
    data::session::ShopSessionStore,
    pipeline::{assets::StaticAssets, csrf::issue_token},
    startup::build_app,
};
use shopfront_test_utils::prelude::*;
use tower_sessions::{
    cookie::{Cookie, CookieJar, Key},
    Session,
};

/// CSRF secret stored in sessions created by [`TestContextExt::session_cookie`].
pub const TEST_CSRF_SECRET: &str = "test-csrf-secret";

/// Name of the session cookie set by the session stage.
pub const SESSION_COOKIE_NAME: &str = "id";

/// Extension trait for TestContext to build the full application
pub trait TestContextExt {
    /// Build the application over the test database, session store and directories
    fn app(&self) -> Router;

    /// Build the application with sessions persisted in the test database
    ///
    /// Requires the shop tables.
    fn app_with_durable_sessions(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn app(&self) -> Router {
        let state: AppState = self.to_app_state();
        let assets = StaticAssets::new(self.public_dir.path(), self.upload_dir.path());

        build_app(state, assets, self.session_store.clone(), test_key())
    }

    fn app_with_durable_sessions(&self) -> Router {
        let state: AppState = self.to_app_state();
        let assets = StaticAssets::new(self.public_dir.path(), self.upload_dir.path());

        build_app(
            state,
            assets,
            ShopSessionStore::new(self.db.clone()),
            test_key(),
        )
    }
}

/// Create a session in the test store and return the `Cookie` header value referencing it
///
/// The session holds the test CSRF secret and, with `account_id`, is logged in
/// as that account.
pub async fn session_cookie(
    test: &TestContext,
    account_id: Option<i32>,
) -> Result<String, TestError> {
    let session = Session::new(None, Arc::new(test.session_store.clone()), None);

    session
        .insert(
            SESSION_CSRF_SECRET_KEY,
            SessionCsrfSecret(TEST_CSRF_SECRET.to_string()),
        )
        .await?;

    if let Some(account_id) = account_id {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(account_id))
            .await?;
        session
            .insert(SESSION_LOGGED_IN_KEY, SessionLoggedIn(true))
            .await?;
    }

    session.save().await?;
    let session_id = session.id().expect("saved session has an ID");

    Ok(signed_cookie(&session_id.to_string()))
}

fn test_key() -> Key {
    Key::from(TEST_SESSION_SECRET.as_bytes())
}

/// Signs `session_id` the way the session stage does and formats it as `Cookie` header value.
pub fn signed_cookie(session_id: &str) -> String {
    let key = test_key();
    let mut jar = CookieJar::new();
    jar.signed_mut(&key)
        .add(Cookie::new(SESSION_COOKIE_NAME, session_id.to_string()));

    let cookie = jar
        .get(SESSION_COOKIE_NAME)
        .expect("cookie was just added");

    format!("{}={}", SESSION_COOKIE_NAME, cookie.value())
}

/// CSRF token valid for sessions created by [`session_cookie`].
pub fn csrf_token() -> String {
    issue_token(TEST_CSRF_SECRET).expect("CSRF token can be issued")
}

/// First CSRF token rendered into a page's forms.
pub fn csrf_token_from_page(body: &str) -> String {
    let marker = "name=\"_csrf\" value=\"";
    let start = body.find(marker).expect("page carries a CSRF token") + marker.len();
    let end = body[start..].find('"').expect("token value is closed") + start;

    body[start..end].to_string()
}

/// Collect a response body into a string.
pub async fn body_text(resp: Response) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("response body can be read")
        .to_bytes();

    String::from_utf8(bytes.to_vec()).expect("response body is UTF-8")
}

/// `Location` header of a redirect response.
pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(axum::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// `Cookie` header value for the session cookie set by a response, if any.
pub fn set_session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{}=", SESSION_COOKIE_NAME)))
        .map(str::to_string)
}
