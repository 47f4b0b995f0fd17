use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::post::PostModel};

const INSERT: &str = "INSERT INTO \"posts\" (\"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_GROUP_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" WHERE \"group_id\" = $1 ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_AUTHOR_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"author_id\", \"group_id\", \"text\", \"image_name\", \"image_type\" FROM \"posts\" WHERE \"author_id\" = $1 ORDER BY \"created_at\" DESC, \"id\" DESC";
const SELECT_MANY_BY_FOLLOWER: &str = "SELECT \"posts\".\"id\", \"posts\".\"created_at\", \"posts\".\"updated_at\", \"posts\".\"author_id\", \"posts\".\"group_id\", \"posts\".\"text\", \"posts\".\"image_name\", \"posts\".\"image_type\" FROM \"posts\" INNER JOIN \"follows\" ON \"follows\".\"author_id\" = \"posts\".\"author_id\" WHERE \"follows\".\"user_id\" = $1 ORDER BY \"posts\".\"created_at\" DESC, \"posts\".\"id\" DESC";
const COUNT_MANY_BY_AUTHOR_ID: &str = "SELECT COUNT(1) FROM \"posts\" WHERE \"author_id\" = $1";
const UPDATE: &str = "UPDATE \"posts\" SET \"updated_at\" = $1, \"group_id\" = $2, \"text\" = $3, \"image_name\" = $4, \"image_type\" = $5 WHERE \"id\" = $6";
const DELETE: &str = "DELETE FROM \"posts\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    qb_log::info(Some("🔧"), "[PostgreSQL] Setting up posts table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"posts\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"author_id\" uuid, \"group_id\" uuid, \"text\" text, \"image_name\" text, \"image_type\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY),
        pool.prepare(SELECT_MANY_BY_GROUP_ID),
        pool.prepare(SELECT_MANY_BY_AUTHOR_ID),
        pool.prepare(SELECT_MANY_BY_FOLLOWER),
        pool.prepare(COUNT_MANY_BY_AUTHOR_ID),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl PostgresDb {
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
