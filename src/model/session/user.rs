//! Logged in account stored in the session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key of the logged in account id.
pub const SESSION_USER_ID_KEY: &str = "user";
/// Session key of the logged in flag.
pub const SESSION_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Id of the account the session was logged in as.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Insert account ID into session
    pub async fn insert(session: &Session, account_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(account_id))
            .await?;

        Ok(())
    }

    /// Get account ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id))
    }
}

/// Flag the view layer reads to decide between anonymous and logged-in navigation.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionLoggedIn(pub bool);

impl SessionLoggedIn {
    /// Mark the session as logged in
    pub async fn insert(session: &Session, logged_in: bool) -> Result<(), Error> {
        session
            .insert(SESSION_LOGGED_IN_KEY, SessionLoggedIn(logged_in))
            .await?;

        Ok(())
    }

    /// Get logged in flag from session, `false` when never set
    pub async fn get(session: &Session) -> Result<bool, Error> {
        Ok(session
            .get::<SessionLoggedIn>(SESSION_LOGGED_IN_KEY)
            .await?
            .map(|SessionLoggedIn(logged_in)| logged_in)
            .unwrap_or(false))
    }
}
