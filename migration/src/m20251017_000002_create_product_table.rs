use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_create_account_table::Account;

static FK_PRODUCT_ACCOUNT_ID: &str = "fk_product_account_id";
static IDX_PRODUCT_ACCOUNT_ID: &str = "idx_product_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Title))
                    .col(double(Product::Price))
                    .col(text(Product::Description))
                    .col(string(Product::ImageUrl))
                    .col(integer(Product::AccountId))
                    .col(timestamp(Product::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_ACCOUNT_ID)
                            .from(Product::Table, Product::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_ACCOUNT_ID)
                    .table(Product::Table)
                    .col(Product::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_ACCOUNT_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Title,
    Price,
    Description,
    ImageUrl,
    AccountId,
    CreatedAt,
}
