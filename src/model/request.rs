//! Request-scoped values the pipeline stages attach as request extensions.
//!
//! Each stage inserts its value before running the rest of the pipeline, so a
//! handler can always extract them with `Extension<T>`.

use crate::model::db::AccountModel;

/// Text fields of the request body, in the order they were sent.
///
/// Filled from `application/x-www-form-urlencoded` bodies by the body-parsing
/// stage and from the text parts of `multipart/form-data` bodies by the upload
/// stage. Empty for every other request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// First value sent under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// First value sent under `name`, or an empty string.
    pub fn get_or_default(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Appends a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Whether no field was sent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(fields: Vec<(String, String)>) -> Self {
        Self(fields)
    }
}

/// Values every view template can read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewLocals {
    /// Session flag set at login, `false` for anonymous sessions.
    pub is_authenticated: bool,
    /// CSRF token to embed in forms.
    pub csrf_token: String,
}

/// CSRF token issued for this request by the CSRF stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsrfToken(pub String);

/// Account the session belongs to, resolved by the identity stage.
///
/// `None` when the session holds no account id or the account no longer exists.
#[derive(Clone, Debug, Default)]
pub struct Identity(pub Option<AccountModel>);

impl Identity {
    /// The resolved account, if any.
    pub fn account(&self) -> Option<&AccountModel> {
        self.0.as_ref()
    }
}
