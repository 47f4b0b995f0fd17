use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::group::GroupModel};

const INSERT: &str = "INSERT INTO \"groups\" (\"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\") VALUES ($1, $2, $3, $4, $5, $6)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\" FROM \"groups\" WHERE \"id\" = $1";
const SELECT_BY_SLUG: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\" FROM \"groups\" WHERE \"slug\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"description\" FROM \"groups\" ORDER BY \"title\" ASC";

pub async fn init(pool: &Pool<Postgres>) {
    qb_log::info(Some("🔧"), "[PostgreSQL] Setting up groups table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"groups\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"title\" text, \"slug\" text, \"description\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_BY_SLUG),
        pool.prepare(SELECT_MANY),
    )
    .unwrap();
}

impl PostgresDb {
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
