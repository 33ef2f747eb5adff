use super::*;

/// Tests the navigation of an anonymous visitor.
///
/// Expected: 200 OK with login and signup links and no logout form
#[tokio::test]
async fn renders_anonymous_navigation_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let resp = test.app().oneshot(request::get("/", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(util::set_session_cookie(&resp).is_some());
    let body = util::body_text(resp).await;
    assert!(body.contains(">Login<"));
    assert!(body.contains(">Signup<"));
    assert!(!body.contains("Logout"));

    Ok(())
}

/// Tests the navigation of a logged in session.
///
/// Expected: 200 OK with a logout form carrying a CSRF token and admin links
#[tokio::test]
async fn renders_logout_form_for_logged_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;

    let resp = test
        .app()
        .oneshot(request::get("/", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_text(resp).await;
    assert!(body.contains("Logout"));
    assert!(body.contains("Admin Products"));
    assert!(body.contains("name=\"_csrf\""));
    assert!(!body.contains(">Login<"));

    Ok(())
}

/// Tests that the CSRF token rendered into a page verifies for the same session.
///
/// Expected: logout with the rendered token redirects to `/`
#[tokio::test]
async fn rendered_csrf_token_verifies_for_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let cookie = util::session_cookie(&test, Some(account.id)).await?;

    let resp = test
        .app()
        .oneshot(request::get("/", Some(&cookie)))
        .await
        .unwrap();
    let token = util::csrf_token_from_page(&util::body_text(resp).await);

    let resp = test
        .app()
        .oneshot(request::form_post("/logout", Some(&cookie), &[("_csrf", token.as_str())]))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(util::location(&resp), Some("/"));

    Ok(())
}
