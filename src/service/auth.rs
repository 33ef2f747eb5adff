//! Signup and login with argon2 password hashes.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{data::account::AccountRepository, error::Error, model::db::AccountModel};

/// Hashes `password` with Argon2id and a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(Error::PasswordHashError)?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(Error::PasswordHashError)?;

    Ok(hash.to_string())
}

/// Checks `password` against a PHC string produced by [`hash_password`].
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(Error::PasswordHashError)` - Stored hash could not be parsed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(password_hash).map_err(Error::PasswordHashError)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::PasswordHashError(e)),
    }
}

/// Service for account signup and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a hashed password.
    ///
    /// # Returns
    /// - `Ok(Some(AccountModel))` - Account created
    /// - `Ok(None)` - Another account already uses `email`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn signup(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<Option<AccountModel>, Error> {
        let account_repo = AccountRepository::new(self.db);

        if account_repo.get_by_email(email).await?.is_some() {
            return Ok(None);
        }

        let password_hash = hash_password(password)?;
        let account = account_repo
            .create(email.to_string(), name.to_string(), password_hash)
            .await?;

        Ok(Some(account))
    }

    /// Checks the credentials of a login attempt.
    ///
    /// # Returns
    /// - `Ok(Some(AccountModel))` - Credentials are valid
    /// - `Ok(None)` - Unknown email or wrong password
    /// - `Err(Error)` - Database operation failed or the stored hash is corrupt
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<AccountModel>, Error> {
        let account_repo = AccountRepository::new(self.db);

        let Some(account) = account_repo.get_by_email(email).await? else {
            return Ok(None);
        };

        if !verify_password(password, &account.password_hash)? {
            return Ok(None);
        }

        Ok(Some(account))
    }
}
