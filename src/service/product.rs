//! Product listing and administration.

use sea_orm::DatabaseConnection;

use crate::{
    data::product::{NewProduct, ProductRepository},
    error::Error,
    model::{db::ProductModel, upload::UploadStorage},
};

/// Service for listing and administering products.
pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStorage,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of ProductService.
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStorage) -> Self {
        Self { db, uploads }
    }

    /// All products in the shop.
    pub async fn get_all(&self) -> Result<Vec<ProductModel>, Error> {
        Ok(ProductRepository::new(self.db).get_all().await?)
    }

    /// Products owned by `account_id`.
    pub async fn get_owned(&self, account_id: i32) -> Result<Vec<ProductModel>, Error> {
        Ok(ProductRepository::new(self.db)
            .get_by_account_id(account_id)
            .await?)
    }

    /// Lists a new product owned by `account_id`.
    pub async fn create(&self, account_id: i32, product: NewProduct) -> Result<ProductModel, Error> {
        Ok(ProductRepository::new(self.db)
            .create(account_id, product)
            .await?)
    }

    /// Deletes a product owned by `account_id` together with its stored image.
    ///
    /// # Returns
    /// - `Ok(true)` - Product deleted
    /// - `Ok(false)` - No such product owned by the account, nothing changed
    /// - `Err(Error)` - Database operation or image removal failed
    pub async fn delete(&self, account_id: i32, product_id: i32) -> Result<bool, Error> {
        let Some(product) = ProductRepository::new(self.db)
            .delete_owned(product_id, account_id)
            .await?
        else {
            return Ok(false);
        };

        self.uploads.remove_by_url(&product.image_url).await?;

        Ok(true)
    }
}
