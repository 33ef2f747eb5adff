//! Account repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

/// Queries on the `account` table.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    ///
    /// # Arguments
    /// - `email`: Login name, must not be used by another account
    /// - `name`: Display name
    /// - `password_hash`: Argon2 PHC string of the account's password
    pub async fn create(
        &self,
        email: String,
        name: String,
        password_hash: String,
    ) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            email: ActiveValue::Set(email),
            name: ActiveValue::Set(name),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    /// Get an account by its ID
    pub async fn get_by_id(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    /// Get an account by its email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Deletes an account
    ///
    /// Returns OK regardless of the account existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await
    }
}
