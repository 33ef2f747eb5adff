//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//! - `DATABASE_URL` (required): SeaORM connection string, postgres or sqlite
//! - `SESSION_SECRET` (required): key used to sign the session cookie, at least 64 bytes
//! - `HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: listening port (default `3000`)
//! - `UPLOAD_DIR`: directory accepted image uploads are written to (default `images`)
//! - `PUBLIC_DIR`: directory static assets are served from (default `public`)

use std::{fmt, path::PathBuf};

use tower_sessions::cookie::Key;

use crate::error::config::ConfigError;

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Minimum length in bytes of `SESSION_SECRET`, required to derive a cookie signing key.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Address to bind the TCP listener to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Database connection string.
    pub database_url: String,
    /// Secret the session cookie is signed with.
    pub session_secret: String,
    /// Directory accepted image uploads are stored in.
    pub upload_dir: PathBuf,
    /// Directory static assets are served from.
    pub public_dir: PathBuf,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration using `lookup` to resolve each variable.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `SESSION_SECRET` not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a port number or
    ///   `SESSION_SECRET` is shorter than [`MIN_SESSION_SECRET_LEN`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes long", MIN_SESSION_SECRET_LEN),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: required("DATABASE_URL")?,
            session_secret,
            upload_dir: lookup("UPLOAD_DIR")
                .unwrap_or_else(|| "images".to_string())
                .into(),
            public_dir: lookup("PUBLIC_DIR")
                .unwrap_or_else(|| "public".to_string())
                .into(),
        })
    }

    /// Socket address to bind the server to, e.g. `0.0.0.0:3000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Cookie signing key derived from the session secret.
    pub fn session_key(&self) -> Result<Key, ConfigError> {
        Key::try_from(self.session_secret.as_bytes()).map_err(|e| ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: format!("{}", e),
        })
    }
}

// Keeps the session secret out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("session_secret", &"<redacted>")
            .field("upload_dir", &self.upload_dir)
            .field("public_dir", &self.public_dir)
            .finish()
    }
}
