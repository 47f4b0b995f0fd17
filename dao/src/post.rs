use std::{path::Path, str::FromStr};

use anyhow::Result;
use chrono::{DateTime, Utc};
use mime::Mime;
use qb_db_postgresql::model::post::PostModel as PostPostgresModel;
use qb_db_sqlite::model::post::PostModel as PostSqliteModel;
use tokio::fs;
use uuid::Uuid;

use crate::{comment::CommentDao, Db};

pub struct PostDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: Uuid,
    group_id: Option<Uuid>,
    text: String,
    image_name: Option<String>,
    image_type: Option<Mime>,
}

impl PostDao {
    pub fn new(author_id: &Uuid, group_id: &Option<Uuid>, text: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            author_id: *author_id,
            group_id: *group_id,
            text: text.to_owned(),
            image_name: None,
            image_type: None,
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

    pub fn author_id(&self) -> &Uuid {
        &self.author_id
    }

    pub fn group_id(&self) -> &Option<Uuid> {
        &self.group_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image_name(&self) -> &Option<String> {
        &self.image_name
    }

    pub fn image_type(&self) -> &Option<Mime> {
        &self.image_type
    }

    pub fn set_group_id(&mut self, group_id: &Option<Uuid>) {
        self.group_id = *group_id;
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    pub async fn save_image(
        &mut self,
        db: &Db,
        media_path: &str,
        file_name: &str,
        content_type: &Mime,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        fs::create_dir_all(media_path).await?;
        fs::copy(path, &format!("{}/{}", media_path, &self.id)).await?;

        self.image_name = Some(file_name.to_owned());
        self.image_type = Some(content_type.clone());
        self.db_update(db).await
    }

    pub async fn delete_image(&mut self, db: &Db, media_path: &str) -> Result<()> {
        fs::remove_file(&format!("{}/{}", media_path, &self.id)).await?;

        self.image_name = None;
        self.image_type = None;
        self.db_update(db).await
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_post(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_post(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Self::from_postgresdb_model(&db.select_post(id).await?),
            Db::SqliteDb(db) => Self::from_sqlitedb_model(&db.select_post(id).await?),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let posts = db.select_many_posts().await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_postgresdb_model(post)?);
                }
                Ok(posts_data)
            }
            Db::SqliteDb(db) => {
                let posts = db.select_many_posts().await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_sqlitedb_model(post)?);
                }
                Ok(posts_data)
            }
        }
    }

    pub async fn db_select_many_by_group_id(db: &Db, group_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let posts = db.select_many_posts_by_group_id(group_id).await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_postgresdb_model(post)?);
                }
                Ok(posts_data)
            }
            Db::SqliteDb(db) => {
                let posts = db.select_many_posts_by_group_id(group_id).await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_sqlitedb_model(post)?);
                }
                Ok(posts_data)
            }
        }
    }

    pub async fn db_select_many_by_author_id(db: &Db, author_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let posts = db.select_many_posts_by_author_id(author_id).await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_postgresdb_model(post)?);
                }
                Ok(posts_data)
            }
            Db::SqliteDb(db) => {
                let posts = db.select_many_posts_by_author_id(author_id).await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_sqlitedb_model(post)?);
                }
                Ok(posts_data)
            }
        }
    }

    pub async fn db_select_many_by_follower(db: &Db, user_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let posts = db.select_many_posts_by_follower(user_id).await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_postgresdb_model(post)?);
                }
                Ok(posts_data)
            }
            Db::SqliteDb(db) => {
                let posts = db.select_many_posts_by_follower(user_id).await?;
                let mut posts_data = Vec::with_capacity(posts.len());
                for post in &posts {
                    posts_data.push(Self::from_sqlitedb_model(post)?);
                }
                Ok(posts_data)
            }
        }
    }

    pub async fn db_count_many_by_author_id(db: &Db, author_id: &Uuid) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => db.count_many_posts_by_author_id(author_id).await,
            Db::SqliteDb(db) => db.count_many_posts_by_author_id(author_id).await,
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_post(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_post(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn delete(db: &Db, media_path: &str, id: &Uuid) -> Result<()> {
        let post_data = Self::db_select(db, id).await?;
        if post_data.image_name().is_some() {
            fs::remove_file(&format!("{media_path}/{id}")).await?;
        }

        CommentDao::db_delete_many_by_post_id(db, id).await?;

        match db {
            Db::PostgresqlDb(db) => db.delete_post(id).await,
            Db::SqliteDb(db) => db.delete_post(id).await,
        }
    }

    fn from_postgresdb_model(model: &PostPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            author_id: *model.author_id(),
            group_id: *model.group_id(),
            text: model.text().to_owned(),
            image_name: model.image_name().to_owned(),
            image_type: match model.image_type() {
                Some(image_type) => Some(Mime::from_str(image_type)?),
                None => None,
            },
        })
    }

    fn to_postgresdb_model(&self) -> PostPostgresModel {
        PostPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.author_id,
            &self.group_id,
            &self.text,
            &self.image_name,
            &self.image_type.as_ref().map(|mime| mime.to_string()),
        )
    }

    fn from_sqlitedb_model(model: &PostSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            author_id: *model.author_id(),
            group_id: *model.group_id(),
            text: model.text().to_owned(),
            image_name: model.image_name().to_owned(),
            image_type: match model.image_type() {
                Some(image_type) => Some(Mime::from_str(image_type)?),
                None => None,
            },
        })
    }

    fn to_sqlitedb_model(&self) -> PostSqliteModel {
        PostSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.author_id,
            &self.group_id,
            &self.text,
            &self.image_name,
            &self.image_type.as_ref().map(|mime| mime.to_string()),
        )
    }
}
