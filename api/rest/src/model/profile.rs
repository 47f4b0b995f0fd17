use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct FindOneProfileReqPath {
    username: String,
}

impl FindOneProfileReqPath {
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Deserialize)]
pub struct FindManyProfilePostReqPath {
    username: String,
}

impl FindManyProfilePostReqPath {
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Deserialize)]
pub struct FindManyProfilePostReqQuery {
    page: Option<String>,
}

impl FindManyProfilePostReqQuery {
    pub fn page(&self) -> &Option<String> {
        &self.page
    }
}

#[derive(Serialize)]
pub struct ProfileResJson {
    id: Uuid,
    joined_at: DateTime<Utc>,
    username: String,
    posts_count: i64,
    followers_count: i64,
    following_count: i64,
    is_following: Option<bool>,
}

impl ProfileResJson {
    pub fn new(
        id: &Uuid,
        joined_at: &DateTime<Utc>,
        username: &str,
        posts_count: &i64,
        followers_count: &i64,
        following_count: &i64,
        is_following: &Option<bool>,
    ) -> Self {
        Self {
            id: *id,
            joined_at: *joined_at,
            username: username.to_owned(),
            posts_count: *posts_count,
            followers_count: *followers_count,
            following_count: *following_count,
            is_following: *is_following,
        }
    }
}
