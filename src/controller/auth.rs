//! Login, signup and logout.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Router,
};
use tower_sessions::Session;

use crate::{
    controller::util::csrf::validate_csrf,
    error::Error,
    model::{
        app::AppState,
        request::{FormFields, ViewLocals},
        session::{flash::FLASH_ERROR, Flash, SessionLoggedIn, SessionUserId},
    },
    service::auth::AuthService,
    view::{self, LoginPage, SignupPage},
};

/// Flashed when the email is unknown or the password is wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Flashed when signing up with an email another account already uses.
pub const EMAIL_TAKEN_MESSAGE: &str = "E-Mail exists already, please pick a different one.";

/// Flashed when signing up without an email or password.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter an email and a password.";

/// Login, signup and logout routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(get_login).post(post_login))
        .route("/signup", get(get_signup).post(post_signup))
        .route("/logout", post(post_logout))
}

/// Renders the login form with the error flashed by the last failed attempt.
pub async fn get_login(
    Extension(locals): Extension<ViewLocals>,
    Extension(flash): Extension<Flash>,
) -> Result<Response, Error> {
    let error_message = flash.take_first(FLASH_ERROR).await?;

    view::render(
        StatusCode::OK,
        &LoginPage {
            locals,
            error_message,
        },
    )
}

/// Logs the session in as the account matching the submitted credentials.
///
/// # Responses
/// - 303 See Other to `/`: logged in, the session ID is cycled
/// - 303 See Other to `/login`: invalid credentials, an error is flashed
/// - 403 Forbidden: CSRF verification failed
/// - 500 Internal Server Error: database or session error
pub async fn post_login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Extension(fields): Extension<FormFields>,
    Extension(flash): Extension<Flash>,
) -> Result<Response, Error> {
    validate_csrf(&session, &headers, &fields).await?;

    let email = fields.get_or_default("email");
    let password = fields.get_or_default("password");

    let Some(account) = AuthService::new(&state.db).login(&email, &password).await? else {
        tracing::debug!("Failed login attempt for {:?}", email);
        flash.push(FLASH_ERROR, INVALID_CREDENTIALS_MESSAGE).await?;

        return Ok(Redirect::to("/login").into_response());
    };

    session.cycle_id().await?;
    SessionUserId::insert(&session, account.id).await?;
    SessionLoggedIn::insert(&session, true).await?;

    tracing::debug!("Account ID {} logged in", account.id);

    Ok(Redirect::to("/").into_response())
}

/// Renders the signup form with the error flashed by the last failed attempt.
pub async fn get_signup(
    Extension(locals): Extension<ViewLocals>,
    Extension(flash): Extension<Flash>,
) -> Result<Response, Error> {
    let error_message = flash.take_first(FLASH_ERROR).await?;

    view::render(
        StatusCode::OK,
        &SignupPage {
            locals,
            error_message,
        },
    )
}

/// Creates an account from the submitted form.
///
/// # Responses
/// - 303 See Other to `/login`: account created
/// - 303 See Other to `/signup`: email missing or already used, an error is flashed
/// - 403 Forbidden: CSRF verification failed
/// - 500 Internal Server Error: database or session error
pub async fn post_signup(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Extension(fields): Extension<FormFields>,
    Extension(flash): Extension<Flash>,
) -> Result<Response, Error> {
    validate_csrf(&session, &headers, &fields).await?;

    let email = fields.get_or_default("email").trim().to_string();
    let name = fields.get_or_default("name").trim().to_string();
    let password = fields.get_or_default("password");

    if email.is_empty() || password.is_empty() {
        flash.push(FLASH_ERROR, MISSING_CREDENTIALS_MESSAGE).await?;

        return Ok(Redirect::to("/signup").into_response());
    }

    match AuthService::new(&state.db)
        .signup(&email, &name, &password)
        .await?
    {
        Some(account) => {
            tracing::debug!("Created account ID {}", account.id);

            Ok(Redirect::to("/login").into_response())
        }
        None => {
            flash.push(FLASH_ERROR, EMAIL_TAKEN_MESSAGE).await?;

            Ok(Redirect::to("/signup").into_response())
        }
    }
}

/// Destroys the session.
///
/// # Responses
/// - 303 See Other to `/`: logged out
/// - 403 Forbidden: CSRF verification failed
pub async fn post_logout(
    session: Session,
    headers: HeaderMap,
    Extension(fields): Extension<FormFields>,
) -> Result<Response, Error> {
    validate_csrf(&session, &headers, &fields).await?;

    session.flush().await?;

    Ok(Redirect::to("/").into_response())
}
