//! Per-session secret CSRF tokens are derived from.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key of the CSRF secret.
pub const SESSION_CSRF_SECRET_KEY: &str = "csrfSecret";

/// Per-session secret CSRF tokens are derived from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionCsrfSecret(pub String);

impl SessionCsrfSecret {
    /// Get the session's CSRF secret, if one was issued
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionCsrfSecret>(SESSION_CSRF_SECRET_KEY)
            .await?
            .map(|SessionCsrfSecret(secret)| secret))
    }

    /// Get the session's CSRF secret, generating and storing a new one on first use
    pub async fn get_or_create(session: &Session) -> Result<String, Error> {
        if let Some(secret) = Self::get(session).await? {
            return Ok(secret);
        }

        let secret = URL_SAFE_NO_PAD.encode(rand::random::<[u8; 32]>());
        session
            .insert(SESSION_CSRF_SECRET_KEY, SessionCsrfSecret(secret.clone()))
            .await?;

        Ok(secret)
    }
}
