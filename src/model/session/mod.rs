//! Typed accessors for the values the shop keeps in the session.
//!
//! Each value lives under a fixed key; the wrappers keep the key and the
//! stored type in one place.

pub mod csrf;
pub mod flash;
pub mod user;

pub use csrf::SessionCsrfSecret;
pub use flash::Flash;
pub use user::{SessionLoggedIn, SessionUserId};
