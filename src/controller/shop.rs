//! Public shop pages.

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
    Extension, Router,
};

use crate::{
    error::Error,
    model::{app::AppState, request::ViewLocals},
    service::product::ProductService,
    view::{self, ShopIndexPage},
};

/// Public shop routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_index))
}

/// Lists every product in the shop.
///
/// # Responses
/// - 200 OK: shop front page
/// - 500 Internal Server Error: database error
pub async fn get_index(
    State(state): State<AppState>,
    Extension(locals): Extension<ViewLocals>,
) -> Result<Response, Error> {
    let products = ProductService::new(&state.db, &state.uploads)
        .get_all()
        .await?;

    view::render(StatusCode::OK, &ShopIndexPage { locals, products })
}
