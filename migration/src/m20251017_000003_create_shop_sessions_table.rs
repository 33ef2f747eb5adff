use sea_orm_migration::{prelude::*, schema::*};

static IDX_SHOP_SESSIONS_EXPIRY_DATE: &str = "idx_shop_sessions_expiry_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopSessions::Table)
                    .if_not_exists()
                    .col(string(ShopSessions::Id).primary_key())
                    .col(text(ShopSessions::Data))
                    .col(big_integer(ShopSessions::ExpiryDate))
                    .to_owned(),
            )
            .await?;

        // Expired-session cleanup filters on expiry_date
        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOP_SESSIONS_EXPIRY_DATE)
                    .table(ShopSessions::Table)
                    .col(ShopSessions::ExpiryDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopSessions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShopSessions {
    Table,
    Id,
    Data,
    ExpiryDate,
}
