use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::post::PostModel};

const INSERT: &str = "INSERT INTO \"posts\" (\"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\") VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_GROUP_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" WHERE \"group_id\" = ? ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_AUTHOR_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" WHERE \"author_id\" = ? ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_FOLLOWER: &str = "SELECT \"posts\".\"id\", \"posts\".\"created_at\", \"posts\".\"updated_at\", \"posts\".\"author_id\", \"posts\".\"group_id\", \"posts\".\"text\", \"posts\".\"image_name\", \"posts\".\"image_type\" FROM \"posts\" INNER JOIN \"follows\" ON \"follows\".\"author_id\" = \"posts\".\"author_id\" WHERE \"follows\".\"user_id\" = ? ORDER BY \"posts\".\"created_at\" DESC, \"posts\".\"id\" DESC";
const COUNT_MANY_BY_AUTHOR_ID: &str = "SELECT COUNT(1) FROM \"posts\" WHERE \"author_id\" = ?";
const UPDATE: &str = "UPDATE \"posts\" SET \"updated_at\" = ?, \"group_id\" = ?, \"text\" = ?, \"image_name\" = ?, \"image_type\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"posts\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    qb_log::info(Some("🔧"), "SQLite: Setting up posts table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"posts\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"author_id\" blob, \"group_id\" blob, \"text\" text, \"image_name\" text, \"image_type\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(SELECT_MANY_BY_GROUP_ID).await.unwrap();
    pool.prepare(SELECT_MANY_BY_AUTHOR_ID).await.unwrap();
    pool.prepare(SELECT_MANY_BY_FOLLOWER).await.unwrap();
    pool.prepare(COUNT_MANY_BY_AUTHOR_ID).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_post(&self, value: &PostModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.author_id())
                .bind(value.group_id())
                .bind(value.text())
                .bind(value.image_name())
                .bind(value.image_type()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_post(&self, id: &Uuid) -> Result<PostModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_posts(&self) -> Result<Vec<PostModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_posts_by_group_id(&self, group_id: &Uuid) -> Result<Vec<PostModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_GROUP_ID).bind(group_id))
            .await?)
    }

    pub async fn select_many_posts_by_author_id(
        &self,
        author_id: &Uuid,
    ) -> Result<Vec<PostModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_AUTHOR_ID).bind(author_id))
            .await?)
    }

    pub async fn select_many_posts_by_follower(&self, user_id: &Uuid) -> Result<Vec<PostModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_FOLLOWER).bind(user_id))
            .await?)
    }

    pub async fn count_many_posts_by_author_id(&self, author_id: &Uuid) -> Result<i64> {
        Ok(self
            .fetch_one::<(i64,)>(sqlx::query_as(COUNT_MANY_BY_AUTHOR_ID).bind(author_id))
            .await?
            .0)
    }

    pub async fn update_post(&self, value: &PostModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.group_id())
                .bind(value.text())
                .bind(value.image_name())
                .bind(value.image_type())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_post(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
