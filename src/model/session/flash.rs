//! Flash messages kept in the session until they are shown.

use std::collections::HashMap;

use tower_sessions::Session;

use crate::error::Error;

/// Session key of the queued flash messages.
pub const SESSION_FLASH_KEY: &str = "flash";

/// Flash kind used for form errors shown above login and signup forms.
pub const FLASH_ERROR: &str = "error";

type FlashMessages = HashMap<String, Vec<String>>;

/// One-shot messages stored in the session until the next page reads them.
///
/// Attached to every request by the flash stage.
#[derive(Clone, Debug)]
pub struct Flash {
    session: Session,
}

impl Flash {
    /// Creates a flash handle over `session`.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Queues `message` under `kind`.
    pub async fn push(&self, kind: &str, message: impl Into<String>) -> Result<(), Error> {
        let mut messages = self.messages().await?;
        messages
            .entry(kind.to_string())
            .or_default()
            .push(message.into());

        self.session.insert(SESSION_FLASH_KEY, messages).await?;

        Ok(())
    }

    /// Returns and clears the messages queued under `kind`.
    pub async fn take(&self, kind: &str) -> Result<Vec<String>, Error> {
        let mut messages = self.messages().await?;
        let Some(taken) = messages.remove(kind) else {
            return Ok(Vec::new());
        };

        if messages.is_empty() {
            self.session.remove::<FlashMessages>(SESSION_FLASH_KEY).await?;
        } else {
            self.session.insert(SESSION_FLASH_KEY, messages).await?;
        }

        Ok(taken)
    }

    /// Returns and clears the first message queued under `kind`, dropping the rest.
    pub async fn take_first(&self, kind: &str) -> Result<Option<String>, Error> {
        Ok(self.take(kind).await?.into_iter().next())
    }

    async fn messages(&self) -> Result<FlashMessages, Error> {
        Ok(self
            .session
            .get::<FlashMessages>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default())
    }
}
