//! Factory functions for generating in-memory database models.
//!
//! These models don't touch the database, suitable for unit tests of code that
//! only inspects a model.

use chrono::Utc;

use crate::{
    constant::{TEST_EMAIL, TEST_NAME},
    model::{AccountModel, ProductModel},
};

/// Create a mock account model with standard test values.
pub fn mock_account_model(id: i32) -> AccountModel {
    AccountModel {
        id,
        email: TEST_EMAIL.to_string(),
        name: TEST_NAME.to_string(),
        password_hash: String::new(),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock product model owned by `account_id`.
pub fn mock_product_model(id: i32, account_id: i32) -> ProductModel {
    ProductModel {
        id,
        title: "Test Product".to_string(),
        price: 9.99,
        description: "A product for tests".to_string(),
        image_url: "/images/test.png".to_string(),
        account_id,
        created_at: Utc::now().naive_utc(),
    }
}
