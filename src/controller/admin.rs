//! Product administration for the logged in account.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Router,
};
use tower_sessions::Session;

use crate::{
    controller::util::csrf::validate_csrf,
    data::product::NewProduct,
    error::Error,
    model::{
        app::AppState,
        request::{FormFields, Identity, ViewLocals},
        upload::{UploadClaim, UploadedFile},
    },
    service::product::ProductService,
    view::{self, AdminProductsPage, EditProductPage},
};

/// Shown when a product is submitted without an accepted image.
pub const NOT_AN_IMAGE_MESSAGE: &str = "Attached file is not an image.";

/// Shown when the submitted price is not a non-negative number.
pub const INVALID_PRICE_MESSAGE: &str = "Price must be a positive number.";

/// Product administration routes, mounted under `/admin`.
///
/// Every handler requires a resolved [`Identity`] and redirects to `/login`
/// without one, before any CSRF verification.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products))
        .route("/add-product", get(get_add_product).post(post_add_product))
        .route("/delete-product", post(post_delete_product))
}

fn redirect_to_login() -> Response {
    Redirect::to("/login").into_response()
}

/// Lists the products owned by the logged in account.
pub async fn get_products(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Extension(locals): Extension<ViewLocals>,
) -> Result<Response, Error> {
    let Some(account) = identity.account() else {
        return Ok(redirect_to_login());
    };

    let products = ProductService::new(&state.db, &state.uploads)
        .get_owned(account.id)
        .await?;

    view::render(StatusCode::OK, &AdminProductsPage { locals, products })
}

/// Renders an empty add-product form.
pub async fn get_add_product(
    Extension(identity): Extension<Identity>,
    Extension(locals): Extension<ViewLocals>,
) -> Result<Response, Error> {
    if identity.account().is_none() {
        return Ok(redirect_to_login());
    }

    view::render(
        StatusCode::OK,
        &EditProductPage {
            locals,
            ..Default::default()
        },
    )
}

/// Lists a new product with the image stored by the upload stage.
///
/// The image is claimed once the product exists; on every other outcome the
/// upload stage removes it again.
///
/// # Responses
/// - 303 See Other to `/admin/products`: product created
/// - 303 See Other to `/login`: no logged in account
/// - 403 Forbidden: CSRF verification failed
/// - 422 Unprocessable Entity: no accepted image or invalid price, the form is re-rendered
/// - 500 Internal Server Error: database error
pub async fn post_add_product(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Extension(identity): Extension<Identity>,
    Extension(locals): Extension<ViewLocals>,
    Extension(fields): Extension<FormFields>,
    Extension(UploadedFile(upload)): Extension<UploadedFile>,
    Extension(claim): Extension<UploadClaim>,
) -> Result<Response, Error> {
    let Some(account) = identity.account() else {
        return Ok(redirect_to_login());
    };

    validate_csrf(&session, &headers, &fields).await?;

    let rejected = |message: &str| EditProductPage {
        locals: locals.clone(),
        error_message: Some(message.to_string()),
        title: fields.get_or_default("title"),
        price: fields.get_or_default("price"),
        description: fields.get_or_default("description"),
    };

    let Some(upload) = upload else {
        return view::render(
            StatusCode::UNPROCESSABLE_ENTITY,
            &rejected(NOT_AN_IMAGE_MESSAGE),
        );
    };

    let price = fields
        .get_or_default("price")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0);
    let Some(price) = price else {
        return view::render(
            StatusCode::UNPROCESSABLE_ENTITY,
            &rejected(INVALID_PRICE_MESSAGE),
        );
    };

    let product = ProductService::new(&state.db, &state.uploads)
        .create(
            account.id,
            NewProduct {
                title: fields.get_or_default("title").trim().to_string(),
                price,
                description: fields.get_or_default("description").trim().to_string(),
                image_url: upload.public_url(),
            },
        )
        .await?;
    claim.claim();

    tracing::debug!(
        "Account ID {} created product ID {}",
        account.id,
        product.id
    );

    Ok(Redirect::to("/admin/products").into_response())
}

/// Deletes a product owned by the logged in account.
///
/// Products owned by other accounts and unknown IDs are left alone.
///
/// # Responses
/// - 303 See Other to `/admin/products`: request handled
/// - 303 See Other to `/login`: no logged in account
/// - 403 Forbidden: CSRF verification failed
/// - 500 Internal Server Error: database or filesystem error
pub async fn post_delete_product(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Extension(identity): Extension<Identity>,
    Extension(fields): Extension<FormFields>,
) -> Result<Response, Error> {
    let Some(account) = identity.account() else {
        return Ok(redirect_to_login());
    };

    validate_csrf(&session, &headers, &fields).await?;

    let Ok(product_id) = fields.get_or_default("productId").parse::<i32>() else {
        tracing::debug!("Delete requested without a valid product ID");

        return Ok(Redirect::to("/admin/products").into_response());
    };

    let deleted = ProductService::new(&state.db, &state.uploads)
        .delete(account.id, product_id)
        .await?;

    if !deleted {
        tracing::warn!(
            "Account ID {} tried to delete product ID {} it does not own",
            account.id,
            product_id
        );
    }

    Ok(Redirect::to("/admin/products").into_response())
}
