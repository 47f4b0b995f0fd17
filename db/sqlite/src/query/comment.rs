use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::comment::CommentModel};

const INSERT: &str = "INSERT INTO \"comments\" (\"id\", \"created_at\", \"updated_at\", \"post_id\", \"author_id\", \"text\") VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_MANY_BY_POST_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"post_id\", \"author_id\", \"text\" FROM \"comments\" WHERE \"post_id\" = ? ORDER BY \"created_at\" ASC, \"id\" ASC";
const DELETE_MANY_BY_POST_ID: &str = "DELETE FROM \"comments\" WHERE \"post_id\" = ?";
const DELETE_MANY_BY_AUTHOR_ID: &str = "DELETE FROM \"comments\" WHERE \"author_id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    qb_log::info(Some("🔧"), "SQLite: Setting up comments table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"comments\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"post_id\" blob, \"author_id\" blob, \"text\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT_MANY_BY_POST_ID).await.unwrap();
    pool.prepare(DELETE_MANY_BY_POST_ID).await.unwrap();
    pool.prepare(DELETE_MANY_BY_AUTHOR_ID).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_comment(&self, value: &CommentModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.post_id())
                .bind(value.author_id())
                .bind(value.text()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_many_comments_by_post_id(
        &self,
        post_id: &Uuid,
    ) -> Result<Vec<CommentModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_POST_ID).bind(post_id))
            .await?)
    }

    pub async fn delete_many_comments_by_post_id(&self, post_id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE_MANY_BY_POST_ID).bind(post_id))
            .await?;
        Ok(())
    }

    pub async fn delete_many_comments_by_author_id(&self, author_id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE_MANY_BY_AUTHOR_ID).bind(author_id))
            .await?;
        Ok(())
    }
}
