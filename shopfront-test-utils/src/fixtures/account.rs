use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    constant::{TEST_NAME, TEST_PASSWORD},
    error::TestError,
    model::AccountModel,
    TestContext,
};

/// Account fixture helpers, see [`TestContext::account`].
pub struct AccountFixtures<'a> {
    setup: &'a TestContext,
}

impl TestContext {
    /// Access account fixture helpers
    pub fn account(&self) -> AccountFixtures<'_> {
        AccountFixtures { setup: self }
    }
}

impl<'a> AccountFixtures<'a> {
    /// Insert an account with `email` whose password is [`TEST_PASSWORD`].
    ///
    /// # Returns
    /// - `Ok(AccountModel)` - The inserted account
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. missing table or duplicate email
    pub async fn insert_account(&self, email: &str) -> Result<AccountModel, TestError> {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
            .map_err(|e| TestError::PasswordHashError(e.to_string()))?;
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHashError(e.to_string()))?
            .to_string();

        let account = entity::account::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(TEST_NAME.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(account.insert(&self.setup.db).await?)
    }
}
