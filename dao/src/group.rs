use anyhow::Result;
use chrono::{DateTime, Utc};
use qb_db_postgresql::model::group::GroupModel as GroupPostgresModel;
use qb_db_sqlite::model::group::GroupModel as GroupSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct GroupDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    slug: String,
    description: String,
}

impl GroupDao {
    pub fn new(title: &str, slug: &str, description: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            title: title.to_owned(),
            slug: slug.to_owned(),
            description: description.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_group(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_group(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_group(id).await?)),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_group(id).await?)),
        }
    }

    pub async fn db_select_by_slug(db: &Db, slug: &str) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_group_by_slug(slug).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(
                &db.select_group_by_slug(slug).await?,
            )),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let groups = db.select_many_groups().await?;
                let mut groups_data = Vec::with_capacity(groups.len());
                for group in &groups {
                    groups_data.push(Self::from_postgresdb_model(group));
                }
                Ok(groups_data)
            }
            Db::SqliteDb(db) => {
                let groups = db.select_many_groups().await?;
                let mut groups_data = Vec::with_capacity(groups.len());
                for group in &groups {
                    groups_data.push(Self::from_sqlitedb_model(group));
                }
                Ok(groups_data)
            }
        }
    }

    fn from_postgresdb_model(model: &GroupPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            slug: model.slug().to_owned(),
            description: model.description().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> GroupPostgresModel {
        GroupPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.slug,
            &self.description,
        )
    }

    fn from_sqlitedb_model(model: &GroupSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            slug: model.slug().to_owned(),
            description: model.description().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> GroupSqliteModel {
        GroupSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.slug,
            &self.description,
        )
    }
}
