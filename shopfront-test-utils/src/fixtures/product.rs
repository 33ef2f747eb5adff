use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::ProductModel, TestContext};

/// Product fixture helpers, see [`TestContext::product`].
pub struct ProductFixtures<'a> {
    setup: &'a TestContext,
}

impl TestContext {
    /// Access product fixture helpers
    pub fn product(&self) -> ProductFixtures<'_> {
        ProductFixtures { setup: self }
    }
}

impl<'a> ProductFixtures<'a> {
    /// Insert a product titled `title` owned by `account_id`.
    ///
    /// The image URL points at `/images/<title>.png`; no file is written.
    pub async fn insert_product(
        &self,
        account_id: i32,
        title: &str,
    ) -> Result<ProductModel, TestError> {
        let product = entity::product::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            price: ActiveValue::Set(9.99),
            description: ActiveValue::Set(format!("Description of {}", title)),
            image_url: ActiveValue::Set(format!("/images/{}.png", title.to_lowercase())),
            account_id: ActiveValue::Set(account_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(product.insert(&self.setup.db).await?)
    }
}
