use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct PostModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: Uuid,
    group_id: Option<Uuid>,
    text: String,
    image_name: Option<String>,
    image_type: Option<String>,
}

impl PostModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        author_id: &Uuid,
        group_id: &Option<Uuid>,
        text: &str,
        image_name: &Option<String>,
        image_type: &Option<String>,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            author_id: *author_id,
            group_id: *group_id,
            text: text.to_owned(),
            image_name: image_name.to_owned(),
            image_type: image_type.to_owned(),
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

    pub fn image_type(&self) -> &Option<String> {
        &self.image_type
    }
}
