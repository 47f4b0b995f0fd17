use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct InsertOneCommentReqPath {
    post_id: Uuid,
}

impl InsertOneCommentReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOneCommentReqJson {
    #[validate(length(min = 1))]
    text: String,
}

impl InsertOneCommentReqJson {
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Deserialize)]
pub struct FindManyCommentReqPath {
    post_id: Uuid,
}

impl FindManyCommentReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(Deserialize)]
pub struct FindManyCommentReqQuery {
    page: Option<String>,
}

impl FindManyCommentReqQuery {
    pub fn page(&self) -> &Option<String> {
        &self.page
    }
}

#[derive(Serialize)]
pub struct CommentResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    post_id: Uuid,
    author_id: Uuid,
    author_username: String,
    text: String,
}

impl CommentResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        post_id: &Uuid,
        author_id: &Uuid,
        author_username: &str,
        text: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            post_id: *post_id,
            author_id: *author_id,
            author_username: author_username.to_owned(),
            text: text.to_owned(),
        }
    }
}
