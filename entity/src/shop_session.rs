use sea_orm::entity::prelude::*;

/// Persisted session record, keyed by the session id carried in the cookie.
///
/// `data` holds the JSON-encoded session map and `expiry_date` the unix
/// timestamp (seconds) after which the record is no longer loaded.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub data: String,
    pub expiry_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
