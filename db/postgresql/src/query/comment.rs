use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::comment::CommentModel};

const INSERT: &str = "INSERT INTO \"comments\" (\"id\", \"created_at\", \"updated_at\", \"post_id\", \"author_id\", \"text\") VALUES ($1, $2, $3, $4, $5, $6)";
const SELECT_MANY_BY_POST_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"post_id\", \"author_id\", \"text\" FROM \"comments\" WHERE \"post_id\" = $1 ORDER BY \"created_at\" ASC, \"id\" ASC";
const DELETE_MANY_BY_POST_ID: &str = "DELETE FROM \"comments\" WHERE \"post_id\" = $1";
const DELETE_MANY_BY_AUTHOR_ID: &str = "DELETE FROM \"comments\" WHERE \"author_id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    qb_log::info(Some("🔧"), "[PostgreSQL] Setting up comments table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"comments\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"post_id\" uuid, \"author_id\" uuid, \"text\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT_MANY_BY_POST_ID),
        pool.prepare(DELETE_MANY_BY_POST_ID),
        pool.prepare(DELETE_MANY_BY_AUTHOR_ID),
    )
    .unwrap();
}

impl PostgresDb {
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
