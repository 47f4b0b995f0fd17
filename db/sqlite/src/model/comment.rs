use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct CommentModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    post_id: Uuid,
    author_id: Uuid,
    text: String,
}

impl CommentModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        post_id: &Uuid,
        author_id: &Uuid,
        text: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
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
}
