use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::group::GroupModel};

const INSERT: &str = "INSERT INTO \"groups\" (\"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\") VALUES (?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\" FROM \"groups\" WHERE \"id\" = ?";
const SELECT_BY_SLUG: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\" FROM \"groups\" WHERE \"slug\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\" FROM \"groups\" ORDER BY \"title\" ASC";

pub async fn init(pool: &Pool<Sqlite>) {
    qb_log::info(Some("🔧"), "SQLite: Setting up groups table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"groups\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"title\" text, \"slug\" text, \"description\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_BY_SLUG).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_group(&self, value: &GroupModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.slug())
                .bind(value.description()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_group(&self, id: &Uuid) -> Result<GroupModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_group_by_slug(&self, slug: &str) -> Result<GroupModel> {
        Ok(self
            .fetch_one(sqlx::query_as(SELECT_BY_SLUG).bind(slug))
            .await?)
    }

    pub async fn select_many_groups(&self) -> Result<Vec<GroupModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }
}
