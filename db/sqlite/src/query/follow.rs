use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::follow::FollowModel};

const INSERT: &str = "INSERT INTO \"follows\" (\"id\", \"created_at\", \"user_id\", \"author_id\") VALUES (?, ?, ?, ?)";
const SELECT_BY_USER_ID_AND_AUTHOR_ID: &str = "SELECT \"id\", \"created_at\", \"user_id\", \"author_id\" FROM \"follows\" WHERE \"user_id\" = ? AND \"author_id\" = ?";
const COUNT_MANY_BY_USER_ID: &str = "SELECT COUNT(1) FROM \"follows\" WHERE \"user_id\" = ?";
const COUNT_MANY_BY_AUTHOR_ID: &str = "SELECT COUNT(1) FROM \"follows\" WHERE \"author_id\" = ?";
const DELETE_BY_USER_ID_AND_AUTHOR_ID: &str = "DELETE FROM \"follows\" WHERE \"user_id\" = ? AND \"author_id\" = ?";
const DELETE_MANY_BY_USER_ID: &str = "DELETE FROM \"follows\" WHERE \"user_id\" = ?";
const DELETE_MANY_BY_AUTHOR_ID: &str = "DELETE FROM \"follows\" WHERE \"author_id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    qb_log::info(Some("🔧"), "SQLite: Setting up follows table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"follows\" (\"id\" blob, \"created_at\" datetime, \"user_id\" blob, \"author_id\" blob, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT_BY_USER_ID_AND_AUTHOR_ID).await.unwrap();
    pool.prepare(COUNT_MANY_BY_USER_ID).await.unwrap();
    pool.prepare(COUNT_MANY_BY_AUTHOR_ID).await.unwrap();
    pool.prepare(DELETE_BY_USER_ID_AND_AUTHOR_ID).await.unwrap();
    pool.prepare(DELETE_MANY_BY_USER_ID).await.unwrap();
    pool.prepare(DELETE_MANY_BY_AUTHOR_ID).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_follow(&self, value: &FollowModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.user_id())
                .bind(value.author_id()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_follow_by_user_id_and_author_id(
        &self,
        user_id: &Uuid,
        author_id: &Uuid,
    ) -> Result<FollowModel> {
        Ok(self
            .fetch_one(
                sqlx::query_as(SELECT_BY_USER_ID_AND_AUTHOR_ID)
                    .bind(user_id)
                    .bind(author_id),
            )
            .await?)
    }

    pub async fn count_many_follows_by_user_id(&self, user_id: &Uuid) -> Result<i64> {
        Ok(self
            .fetch_one::<(i64,)>(sqlx::query_as(COUNT_MANY_BY_USER_ID).bind(user_id))
            .await?
            .0)
    }

    pub async fn count_many_follows_by_author_id(&self, author_id: &Uuid) -> Result<i64> {
        Ok(self
            .fetch_one::<(i64,)>(sqlx::query_as(COUNT_MANY_BY_AUTHOR_ID).bind(author_id))
            .await?
            .0)
    }

    pub async fn delete_follow_by_user_id_and_author_id(
        &self,
        user_id: &Uuid,
        author_id: &Uuid,
    ) -> Result<()> {
        self.execute(
            sqlx::query(DELETE_BY_USER_ID_AND_AUTHOR_ID)
                .bind(user_id)
                .bind(author_id),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_many_follows_by_user_id(&self, user_id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE_MANY_BY_USER_ID).bind(user_id))
            .await?;
        Ok(())
    }

    pub async fn delete_many_follows_by_author_id(&self, author_id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE_MANY_BY_AUTHOR_ID).bind(author_id))
            .await?;
        Ok(())
    }
}
