use anyhow::Result;
use chrono::{DateTime, Utc};
use qb_db_postgresql::model::follow::FollowModel as FollowPostgresModel;
use qb_db_sqlite::model::follow::FollowModel as FollowSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct FollowDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    user_id: Uuid,
    author_id: Uuid,
}

impl FollowDao {
    pub fn new(user_id: &Uuid, author_id: &Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
            user_id: *user_id,
            author_id: *author_id,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }

    pub fn author_id(&self) -> &Uuid {
        &self.author_id
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_follow(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_follow(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select_by_user_id_and_author_id(
        db: &Db,
        user_id: &Uuid,
        author_id: &Uuid,
    ) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_follow_by_user_id_and_author_id(user_id, author_id)
                    .await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(
                &db.select_follow_by_user_id_and_author_id(user_id, author_id)
                    .await?,
            )),
        }
    }

    pub async fn db_count_many_by_user_id(db: &Db, user_id: &Uuid) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => db.count_many_follows_by_user_id(user_id).await,
            Db::SqliteDb(db) => db.count_many_follows_by_user_id(user_id).await,
        }
    }

    pub async fn db_count_many_by_author_id(db: &Db, author_id: &Uuid) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => db.count_many_follows_by_author_id(author_id).await,
            Db::SqliteDb(db) => db.count_many_follows_by_author_id(author_id).await,
        }
    }

    pub async fn db_delete_by_user_id_and_author_id(
        db: &Db,
        user_id: &Uuid,
        author_id: &Uuid,
    ) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => {
                db.delete_follow_by_user_id_and_author_id(user_id, author_id)
                    .await
            }
            Db::SqliteDb(db) => {
                db.delete_follow_by_user_id_and_author_id(user_id, author_id)
                    .await
            }
        }
    }

    pub async fn db_delete_many_by_user_id(db: &Db, user_id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_many_follows_by_user_id(user_id).await,
            Db::SqliteDb(db) => db.delete_many_follows_by_user_id(user_id).await,
        }
    }

    pub async fn db_delete_many_by_author_id(db: &Db, author_id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_many_follows_by_author_id(author_id).await,
            Db::SqliteDb(db) => db.delete_many_follows_by_author_id(author_id).await,
        }
    }

    fn from_postgresdb_model(model: &FollowPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            user_id: *model.user_id(),
            author_id: *model.author_id(),
        }
    }

    fn to_postgresdb_model(&self) -> FollowPostgresModel {
        FollowPostgresModel::new(&self.id, &self.created_at, &self.user_id, &self.author_id)
    }

    fn from_sqlitedb_model(model: &FollowSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            user_id: *model.user_id(),
            author_id: *model.author_id(),
        }
    }

    fn to_sqlitedb_model(&self) -> FollowSqliteModel {
        FollowSqliteModel::new(&self.id, &self.created_at, &self.user_id, &self.author_id)
    }
}
