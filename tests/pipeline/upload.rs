use entity::prelude::Product;
use sea_orm::EntityTrait;
use shopfront::controller::admin::NOT_AN_IMAGE_MESSAGE;

use super::*;

/// Tests a product submitted with a png image.
///
/// Expected: the image is stored and served under `/images/`
#[tokio::test]
async fn stores_png_upload_and_serves_it() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let token = util::csrf_token();

    let resp = test
        .app()
        .oneshot(request::multipart_post(
            "/admin/add-product",
            Some(&cookie),
            &[
                ("_csrf", None, token.as_str()),
                ("title", None, "Book"),
                ("price", None, "12.5"),
                ("description", None, "A good read"),
                ("image", Some(("cover.png", "image/png")), "PNG"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(util::location(&resp), Some("/admin/products"));

    let products = Product::find().all(&test.db).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Book");
    assert_eq!(products[0].price, 12.5);
    assert!(products[0].image_url.starts_with("/images/"));
    assert!(products[0].image_url.ends_with(".png"));
    assert_eq!(std::fs::read_dir(test.upload_dir.path())?.count(), 1);

    let resp = test
        .app()
        .oneshot(request::get(&products[0].image_url, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(util::body_text(resp).await, "PNG");

    Ok(())
}

/// Tests a product submitted with a gif image.
///
/// Expected: 422 with the form re-rendered, nothing stored
#[tokio::test]
async fn drops_gif_upload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let token = util::csrf_token();

    let resp = test
        .app()
        .oneshot(request::multipart_post(
            "/admin/add-product",
            Some(&cookie),
            &[
                ("_csrf", None, token.as_str()),
                ("title", None, "Animation"),
                ("price", None, "1"),
                ("description", None, "Moves"),
                ("image", Some(("anim.gif", "image/gif")), "GIF89a"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = util::body_text(resp).await;
    assert!(body.contains(NOT_AN_IMAGE_MESSAGE));
    assert!(body.contains("Animation"));
    assert_eq!(std::fs::read_dir(test.upload_dir.path())?.count(), 0);
    assert!(Product::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Tests a png submitted with an invalid price.
///
/// Expected: 422 and the already stored image is removed again
#[tokio::test]
async fn removes_stored_upload_for_invalid_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let token = util::csrf_token();

    let resp = test
        .app()
        .oneshot(request::multipart_post(
            "/admin/add-product",
            Some(&cookie),
            &[
                ("_csrf", None, token.as_str()),
                ("title", None, "Book"),
                ("price", None, "cheap"),
                ("image", Some(("cover.jpg", "image/jpeg")), "JPG"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(std::fs::read_dir(test.upload_dir.path())?.count(), 0);

    Ok(())
}

/// Tests a png sent by a visitor who is not logged in.
///
/// Expected: redirect to `/login` and the image is not kept
#[tokio::test]
async fn removes_upload_of_anonymous_visitor() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let resp = test
        .app()
        .oneshot(request::multipart_post(
            "/admin/add-product",
            None,
            &[
                ("title", None, "Book"),
                ("price", None, "10"),
                ("image", Some(("cover.png", "image/png")), "PNG"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(util::location(&resp), Some("/login"));
    assert_eq!(std::fs::read_dir(test.upload_dir.path())?.count(), 0);

    Ok(())
}

/// Tests a png sent to a path without a route.
///
/// Expected: 404 and the image is not kept
#[tokio::test]
async fn removes_upload_sent_to_unknown_path() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let resp = test
        .app()
        .oneshot(request::multipart_post(
            "/does-not-exist",
            None,
            &[("image", Some(("cover.png", "image/png")), "PNG")],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(std::fs::read_dir(test.upload_dir.path())?.count(), 0);

    Ok(())
}

/// Tests a png sent with a CSRF token of another session.
///
/// Expected: 403 and the image is not kept
#[tokio::test]
async fn removes_upload_when_csrf_check_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;
    let token = shopfront::pipeline::csrf::issue_token("another-secret").unwrap();

    let resp = test
        .app()
        .oneshot(request::multipart_post(
            "/admin/add-product",
            Some(&cookie),
            &[
                ("_csrf", None, token.as_str()),
                ("title", None, "Book"),
                ("price", None, "10"),
                ("image", Some(("cover.png", "image/png")), "PNG"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(std::fs::read_dir(test.upload_dir.path())?.count(), 0);
    assert!(Product::find().all(&test.db).await?.is_empty());

    Ok(())
}
