//! Route table of the shop.

use axum::{routing::get, Router};

use crate::{controller, model::app::AppState};

/// Builds the shop's router.
///
/// # Registered Routes
/// - `GET /` - Shop front page
/// - `GET|POST /login`, `GET|POST /signup`, `POST /logout` - Authentication
/// - `GET /admin/products`, `GET|POST /admin/add-product`, `POST /admin/delete-product` - Product administration
/// - `GET /500` - Error page
/// - Anything else, including a known path with another method - Not-found page
///
/// The request pipeline is applied on top of this router by [`crate::pipeline::apply`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", controller::admin::routes())
        .merge(controller::shop::routes())
        .merge(controller::auth::routes())
        .route("/500", get(controller::error::get_500))
        .fallback(controller::error::get_404)
        .method_not_allowed_fallback(controller::error::get_404)
}
