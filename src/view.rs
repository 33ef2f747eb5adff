//! HTML views rendered with askama.
//!
//! Templates live in `templates/` and all extend `base.html`, which reads the
//! [`ViewLocals`] every page carries to render the navigation and CSRF fields.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    error::Error,
    model::{db::ProductModel, request::ViewLocals},
};

/// Shop front page listing every product.
#[derive(Template)]
#[template(path = "shop/index.html")]
pub struct ShopIndexPage {
    /// Values shared by every view.
    pub locals: ViewLocals,
    /// Products to list.
    pub products: Vec<ProductModel>,
}

/// Login form.
#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginPage {
    /// Values shared by every view.
    pub locals: ViewLocals,
    /// Flashed error from the previous attempt.
    pub error_message: Option<String>,
}

/// Signup form.
#[derive(Template)]
#[template(path = "auth/signup.html")]
pub struct SignupPage {
    /// Values shared by every view.
    pub locals: ViewLocals,
    /// Flashed error from the previous attempt.
    pub error_message: Option<String>,
}

/// Add-product form, re-rendered with the submitted values when it is rejected.
#[derive(Template, Default)]
#[template(path = "admin/edit_product.html")]
pub struct EditProductPage {
    /// Values shared by every view.
    pub locals: ViewLocals,
    /// Reason the last submission was rejected.
    pub error_message: Option<String>,
    /// Submitted title.
    pub title: String,
    /// Submitted price, as typed.
    pub price: String,
    /// Submitted description.
    pub description: String,
}

/// Products owned by the logged in account.
#[derive(Template)]
#[template(path = "admin/products.html")]
pub struct AdminProductsPage {
    /// Values shared by every view.
    pub locals: ViewLocals,
    /// Products to list.
    pub products: Vec<ProductModel>,
}

/// Error page used by the not-found fallback and the error stage.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    /// Values shared by every view.
    pub locals: ViewLocals,
    /// Numeric HTTP status shown on the page.
    pub status: u16,
    /// Page heading.
    pub title: &'static str,
    /// Explanation below the heading.
    pub message: &'static str,
}

impl ErrorPage {
    /// Builds the error page for `status`.
    pub fn new(status: StatusCode, locals: ViewLocals) -> Self {
        let (title, message) = match status {
            StatusCode::NOT_FOUND => (
                "Page Not Found!",
                "The page you are looking for does not exist.",
            ),
            StatusCode::FORBIDDEN => (
                "Forbidden",
                "Your form has expired. Please reload the page and try again.",
            ),
            StatusCode::INTERNAL_SERVER_ERROR => (
                "Some error occurred!",
                "We're working on fixing this, sorry for the inconvenience!",
            ),
            status if status.is_client_error() => (
                "Bad Request",
                "The request could not be processed.",
            ),
            _ => (
                "Some error occurred!",
                "We're working on fixing this, sorry for the inconvenience!",
            ),
        };

        Self {
            locals,
            status: status.as_u16(),
            title,
            message,
        }
    }
}

/// Renders `page` into an HTML response with `status`.
pub fn render<T: Template>(status: StatusCode, page: &T) -> Result<Response, Error> {
    Ok((status, Html(page.render()?)).into_response())
}

/// Renders the error page for `status`.
///
/// Never fails: if the template itself cannot be rendered a plain text body is
/// sent instead, so the error stage always produces a response.
pub fn error_page(status: StatusCode, locals: &ViewLocals) -> Response {
    match ErrorPage::new(status, locals.clone()).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);

            (status, status.canonical_reason().unwrap_or("Error")).into_response()
        }
    }
}
