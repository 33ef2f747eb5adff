use super::*;

/// Tests a path no route matches.
///
/// Expected: 404 with the not-found page
#[tokio::test]
async fn renders_not_found_page_for_unknown_path() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let resp = test
        .app()
        .oneshot(request::get("/does-not-exist", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(util::body_text(resp).await.contains("Page Not Found!"));

    Ok(())
}

/// Tests that an unknown path keeps the visitor's navigation.
///
/// Expected: 404 page with the logout form of the logged in session
#[tokio::test]
async fn not_found_page_keeps_view_locals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;

    let resp = test
        .app()
        .oneshot(request::get("/does-not-exist", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(util::body_text(resp).await.contains("Logout"));

    Ok(())
}

/// Tests the error page route.
///
/// Expected: 500 with the error page
#[tokio::test]
async fn renders_error_page_at_500() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let resp = test.app().oneshot(request::get("/500", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(util::body_text(resp).await.contains("Some error occurred!"));

    Ok(())
}

/// Tests that static files are served before the router.
///
/// Expected: 200 with the file content and no session cookie
#[tokio::test]
async fn serves_static_file_from_public_dir() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    std::fs::write(test.public_dir.path().join("robots.txt"), "User-agent: *")?;

    let resp = test
        .app()
        .oneshot(request::get("/robots.txt", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(util::set_session_cookie(&resp).is_none());
    assert_eq!(util::body_text(resp).await, "User-agent: *");

    Ok(())
}

/// Tests a known path requested with a method it has no handler for.
///
/// Expected: 404 with the not-found page rather than an empty 405
#[tokio::test]
async fn renders_not_found_page_for_unrouted_method() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    for uri in ["/logout", "/admin/delete-product"] {
        let resp = test.app().oneshot(request::get(uri, None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(util::body_text(resp).await.contains("Page Not Found!"));
    }

    Ok(())
}
