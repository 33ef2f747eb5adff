//! Not-found and error pages.

use axum::{http::StatusCode, response::Response, Extension};

use crate::{model::request::ViewLocals, view};

/// Not-found fallback for requests no route matched.
pub async fn get_404(Extension(locals): Extension<ViewLocals>) -> Response {
    view::error_page(StatusCode::NOT_FOUND, &locals)
}

/// Renders the error page, the target of redirects after unexpected failures.
pub async fn get_500(Extension(locals): Extension<ViewLocals>) -> Response {
    view::error_page(StatusCode::INTERNAL_SERVER_ERROR, &locals)
}
