//! Durable session store over the `shop_sessions` table.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store, ExpiredDeletion, SessionStore,
};

use crate::model::db::ShopSessionModel;

/// [`SessionStore`] persisting sessions in the shop database.
///
/// Records are stored as JSON with their expiry as a unix timestamp, so expired
/// sessions can be deleted with a single query by [`ExpiredDeletion::delete_expired`].
#[derive(Clone, Debug)]
pub struct ShopSessionStore {
    db: DatabaseConnection,
}

impl ShopSessionStore {
    /// Creates a new instance of [`ShopSessionStore`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn id_exists(&self, session_id: &Id) -> Result<bool, DbErr> {
        let count = entity::prelude::ShopSession::find_by_id(session_id.to_string())
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn upsert(&self, record: &Record) -> session_store::Result<()> {
        let data = serde_json::to_string(&record.data)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        let session = entity::shop_session::ActiveModel {
            id: ActiveValue::Set(record.id.to_string()),
            data: ActiveValue::Set(data),
            expiry_date: ActiveValue::Set(record.expiry_date.unix_timestamp()),
        };

        entity::prelude::ShopSession::insert(session)
            .on_conflict(
                OnConflict::column(entity::shop_session::Column::Id)
                    .update_columns([
                        entity::shop_session::Column::Data,
                        entity::shop_session::Column::ExpiryDate,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

fn backend(err: DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}

fn decode(session_id: Id, model: ShopSessionModel) -> session_store::Result<Record> {
    let data = serde_json::from_str(&model.data)
        .map_err(|e| session_store::Error::Decode(e.to_string()))?;
    let expiry_date = OffsetDateTime::from_unix_timestamp(model.expiry_date)
        .map_err(|e| session_store::Error::Decode(e.to_string()))?;

    Ok(Record {
        id: session_id,
        data,
        expiry_date,
    })
}

#[async_trait]
impl SessionStore for ShopSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.id_exists(&record.id).await.map_err(backend)? {
            record.id = Id::default();
        }

        self.upsert(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.upsert(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        entity::prelude::ShopSession::find_by_id(session_id.to_string())
            .filter(entity::shop_session::Column::ExpiryDate.gt(now))
            .one(&self.db)
            .await
            .map_err(backend)?
            .map(|model| decode(*session_id, model))
            .transpose()
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        entity::prelude::ShopSession::delete_by_id(session_id.to_string())
            .exec(&self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for ShopSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let result = entity::prelude::ShopSession::delete_many()
            .filter(entity::shop_session::Column::ExpiryDate.lte(now))
            .exec(&self.db)
            .await
            .map_err(backend)?;

        if result.rows_affected > 0 {
            tracing::debug!("Deleted {} expired sessions", result.rows_affected);
        }

        Ok(())
    }
}
