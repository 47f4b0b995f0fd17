use anyhow::Result;
use chrono::{DateTime, Utc};
use futures::future;
use qb_db_postgresql::model::user::UserModel as UserPostgresModel;
use qb_db_sqlite::model::user::UserModel as UserSqliteModel;
use uuid::Uuid;

use crate::{comment::CommentDao, follow::FollowDao, post::PostDao, Db};

pub struct UserDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    username: String,
    email: String,
    password_hash: String,
}

impl UserDao {
    pub fn new(username: &str, email: &str, password_hash: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
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

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_owned()
    }

    pub fn set_password_hash(&mut self, password_hash: &str) {
        self.password_hash = password_hash.to_owned();
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_user(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_user(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_user(id).await?)),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_user(id).await?)),
        }
    }

    pub async fn db_select_by_username(db: &Db, username: &str) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_user_by_username(username).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(
                &db.select_user_by_username(username).await?,
            )),
        }
    }

    pub async fn db_select_by_email(db: &Db, email: &str) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_user_by_email(email).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(
                &db.select_user_by_email(email).await?,
            )),
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_user(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_user(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn delete(db: &Db, media_path: &str, id: &Uuid) -> Result<()> {
        let posts_data = PostDao::db_select_many_by_author_id(db, id).await?;
        let mut remove_posts = Vec::with_capacity(posts_data.len());
        for post_data in &posts_data {
            remove_posts.push(PostDao::delete(db, media_path, post_data.id()));
        }
        future::try_join_all(remove_posts).await?;

        tokio::try_join!(
            CommentDao::db_delete_many_by_author_id(db, id),
            FollowDao::db_delete_many_by_user_id(db, id),
            FollowDao::db_delete_many_by_author_id(db, id),
        )?;

        match db {
            Db::PostgresqlDb(db) => db.delete_user(id).await,
            Db::SqliteDb(db) => db.delete_user(id).await,
        }
    }

    fn from_postgresdb_model(model: &UserPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            username: model.username().to_owned(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> UserPostgresModel {
        UserPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.username,
            &self.email,
            &self.password_hash,
        )
    }

    fn from_sqlitedb_model(model: &UserSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            username: model.username().to_owned(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> UserSqliteModel {
        UserSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.username,
            &self.email,
            &self.password_hash,
        )
    }
}
