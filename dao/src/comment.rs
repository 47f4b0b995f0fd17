use anyhow::Result;
use chrono::{DateTime, Utc};
use qb_db_postgresql::model::comment::CommentModel as CommentPostgresModel;
use qb_db_sqlite::model::comment::CommentModel as CommentSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct CommentDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    post_id: Uuid,
    author_id: Uuid,
    text: String,
}

impl CommentDao {
    pub fn new(post_id: &Uuid, author_id: &Uuid, text: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            post_id: *post_id,
            author_id: *author_id,
            text: text.to_owned(),
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

    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }

    pub fn author_id(&self) -> &Uuid {
        &self.author_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_comment(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_comment(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select_many_by_post_id(db: &Db, post_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let comments = db.select_many_comments_by_post_id(post_id).await?;
                let mut comments_data = Vec::with_capacity(comments.len());
                for comment in &comments {
                    comments_data.push(Self::from_postgresdb_model(comment));
                }
                Ok(comments_data)
            }
            Db::SqliteDb(db) => {
                let comments = db.select_many_comments_by_post_id(post_id).await?;
                let mut comments_data = Vec::with_capacity(comments.len());
                for comment in &comments {
                    comments_data.push(Self::from_sqlitedb_model(comment));
                }
                Ok(comments_data)
            }
        }
    }

    pub async fn db_delete_many_by_post_id(db: &Db, post_id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_many_comments_by_post_id(post_id).await,
            Db::SqliteDb(db) => db.delete_many_comments_by_post_id(post_id).await,
        }
    }

    pub async fn db_delete_many_by_author_id(db: &Db, author_id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_many_comments_by_author_id(author_id).await,
            Db::SqliteDb(db) => db.delete_many_comments_by_author_id(author_id).await,
        }
    }

    fn from_postgresdb_model(model: &CommentPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            post_id: *model.post_id(),
            author_id: *model.author_id(),
            text: model.text().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> CommentPostgresModel {
        CommentPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.post_id,
            &self.author_id,
            &self.text,
        )
    }

    fn from_sqlitedb_model(model: &CommentSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            post_id: *model.post_id(),
            author_id: *model.author_id(),
            text: model.text().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> CommentSqliteModel {
        CommentSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.post_id,
            &self.author_id,
            &self.text,
        )
    }
}
