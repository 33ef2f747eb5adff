//! Tests for product administration.

use entity::prelude::Product;
use sea_orm::EntityTrait;

use super::*;

/// Tests admin pages without a logged in account.
///
/// Expected: 303 to `/login`
#[tokio::test]
async fn redirects_anonymous_visitor_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    for uri in ["/admin/products", "/admin/add-product"] {
        let resp = test.app().oneshot(request::get(uri, None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(util::location(&resp), Some("/login"));
    }

    Ok(())
}

/// Tests an admin form submitted without a session.
///
/// The identity check runs before CSRF verification.
///
/// Expected: 303 to `/login` rather than 403
#[tokio::test]
async fn redirects_post_without_session_before_csrf_check() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let resp = test
        .app()
        .oneshot(request::form_post(
            "/admin/delete-product",
            None,
            &[("productId", "1")],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(util::location(&resp), Some("/login"));

    Ok(())
}

/// Tests the add-product form for a logged in account.
///
/// Expected: 200 OK with a multipart form
#[tokio::test]
async fn renders_add_product_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;

    let resp = test
        .app()
        .oneshot(request::get("/admin/add-product", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(util::body_text(resp).await.contains("multipart"));

    Ok(())
}

/// Tests adding a product without any file.
///
/// Expected: 422 and no product is created
#[tokio::test]
async fn rejects_product_without_image() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let token = util::csrf_token();

    let resp = test
        .app()
        .oneshot(request::form_post(
            "/admin/add-product",
            Some(&cookie),
            &[("title", "Book"), ("price", "10"), ("_csrf", token.as_str())],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(Product::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Tests deleting a product of the logged in account.
///
/// Expected: 303 to `/admin/products` and the product is gone
#[tokio::test]
async fn deletes_owned_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let product = test.product().insert_product(account.id, "Book").await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let token = util::csrf_token();
    let product_id = product.id.to_string();

    let resp = test
        .app()
        .oneshot(request::form_post(
            "/admin/delete-product",
            Some(&cookie),
            &[("productId", product_id.as_str()), ("_csrf", token.as_str())],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(util::location(&resp), Some("/admin/products"));
    assert!(Product::find_by_id(product.id).one(&test.db).await?.is_none());

    Ok(())
}

/// Tests deleting a product owned by another account.
///
/// Expected: 303 to `/admin/products` and the product still exists
#[tokio::test]
async fn leaves_foreign_product_alone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let other = test.account().insert_account("other@example.com").await?;
    let product = test.product().insert_product(other.id, "Lamp").await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let token = util::csrf_token();
    let product_id = product.id.to_string();

    let resp = test
        .app()
        .oneshot(request::form_post(
            "/admin/delete-product",
            Some(&cookie),
            &[("productId", product_id.as_str()), ("_csrf", token.as_str())],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(Product::find_by_id(product.id).one(&test.db).await?.is_some());

    Ok(())
}

/// Tests deleting a product with a missing CSRF token.
///
/// Expected: 403 Forbidden and the product still exists
#[tokio::test]
async fn delete_requires_csrf_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let product = test.product().insert_product(account.id, "Book").await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let product_id = product.id.to_string();

    let resp = test
        .app()
        .oneshot(request::form_post(
            "/admin/delete-product",
            Some(&cookie),
            &[("productId", product_id.as_str())],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(Product::find_by_id(product.id).one(&test.db).await?.is_some());

    Ok(())
}
