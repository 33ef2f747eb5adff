//! CSRF tokens derived from a per-session secret.
//!
//! A token is `<salt>.<mac>` where `mac` is HMAC-SHA256 of the salt keyed with
//! the session's secret, both URL-safe base64. Tokens are salted freshly on
//! every request, so each rendered form carries a different token, and any of
//! them verifies as long as the session keeps its secret.

use axum::{extract::Request, middleware::Next, response::Response};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{request::CsrfToken, session::SessionCsrfSecret},
};

type HmacSha256 = Hmac<Sha256>;

/// Ensures the session has a CSRF secret and attaches a fresh [`CsrfToken`].
pub async fn issue_csrf_token(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let secret = SessionCsrfSecret::get_or_create(&session).await?;
    let token = issue_token(&secret)?;

    request.extensions_mut().insert(CsrfToken(token));

    Ok(next.run(request).await)
}

/// Issues a new token for `secret`.
pub fn issue_token(secret: &str) -> Result<String, Error> {
    let salt = URL_SAFE_NO_PAD.encode(rand::random::<[u8; 16]>());

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::InternalError(format!("Failed to key CSRF MAC: {}", e)))?;
    mac.update(salt.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", salt, signature))
}

/// Whether `token` was issued for `secret`.
pub fn verify_token(secret: &str, token: &str) -> bool {
    let Some((salt, signature)) = token.split_once('.') else {
        return false;
    };
    let Ok(signature) = URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };

    mac.update(salt.as_bytes());
    mac.verify_slice(&signature).is_ok()
}
