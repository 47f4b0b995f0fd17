use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct InsertOneFollowReqPath {
    username: String,
}

impl InsertOneFollowReqPath {
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Deserialize)]
pub struct DeleteOneFollowReqPath {
    username: String,
}

impl DeleteOneFollowReqPath {
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Deserialize)]
pub struct FindManyFeedPostReqQuery {
    page: Option<String>,
}

impl FindManyFeedPostReqQuery {
    pub fn page(&self) -> &Option<String> {
        &self.page
    }
}

#[derive(Serialize)]
pub struct FollowResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    user_id: Uuid,
    author_id: Uuid,
}

impl FollowResJson {
    pub fn new(id: &Uuid, created_at: &DateTime<Utc>, user_id: &Uuid, author_id: &Uuid) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            user_id: *user_id,
            author_id: *author_id,
        }
    }
}

#[derive(Serialize)]
pub struct UnfollowResJson {
    user_id: Uuid,
    author_id: Uuid,
}

impl UnfollowResJson {
    pub fn new(user_id: &Uuid, author_id: &Uuid) -> Self {
        Self {
            user_id: *user_id,
            author_id: *author_id,
        }
    }
}
