//! Product repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

/// Values of a product about to be listed.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    /// Product title.
    pub title: String,
    /// Price in the shop's currency.
    pub price: f64,
    /// Free text description.
    pub description: String,
    /// Public URL of the product image.
    pub image_url: String,
}

/// Queries on the `product` table.
pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new product owned by `account_id`
    pub async fn create(
        &self,
        account_id: i32,
        product: NewProduct,
    ) -> Result<entity::product::Model, DbErr> {
        let product = entity::product::ActiveModel {
            title: ActiveValue::Set(product.title),
            price: ActiveValue::Set(product.price),
            description: ActiveValue::Set(product.description),
            image_url: ActiveValue::Set(product.image_url),
            account_id: ActiveValue::Set(account_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    /// Gets all products, oldest first
    pub async fn get_all(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all products owned by `account_id`, oldest first
    pub async fn get_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::AccountId.eq(account_id))
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Get a product by its ID
    pub async fn get_by_id(&self, product_id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await
    }

    /// Deletes a product if it is owned by `account_id`
    ///
    /// # Returns
    /// - `Some(product)`: The deleted product
    /// - `None`: No product with that ID is owned by the account, nothing was deleted
    pub async fn delete_owned(
        &self,
        product_id: i32,
        account_id: i32,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(product_id)
            .filter(entity::product::Column::AccountId.eq(account_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        product.clone().delete(self.db).await?;

        Ok(Some(product))
    }
}
