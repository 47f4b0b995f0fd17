use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct FollowModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    user_id: Uuid,
    author_id: Uuid,
}

impl FollowModel {
    pub fn new(id: &Uuid, created_at: &DateTime<Utc>, user_id: &Uuid, author_id: &Uuid) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            user_id: *user_id,
            author_id: *author_id,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }

    pub fn author_id(&self) -> &Uuid {
        &self.author_id
    }
}
