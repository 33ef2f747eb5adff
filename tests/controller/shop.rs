use super::*;

/// Tests the shop front page without products.
///
/// Expected: 200 OK with the empty shop notice
#[tokio::test]
async fn renders_empty_shop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let resp = test.app().oneshot(request::get("/", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(util::body_text(resp).await.contains("No Products Found!"));

    Ok(())
}

/// Tests the shop front page lists products of every account.
///
/// Expected: 200 OK listing each product with its price
#[tokio::test]
async fn lists_products_of_all_accounts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let account = test.account().insert_account(TEST_EMAIL).await?;
    let other = test.account().insert_account("other@example.com").await?;
    test.product().insert_product(account.id, "Book").await?;
    test.product().insert_product(other.id, "Lamp").await?;

    let resp = test.app().oneshot(request::get("/", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_text(resp).await;
    assert!(body.contains("Book"));
    assert!(body.contains("Lamp"));
    assert!(body.contains("9.99"));
    assert!(!body.contains("No Products Found!"));

    Ok(())
}
