use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOneGroupReqJson {
    #[validate(length(min = 1, max = 100))]
    title: String,
    #[validate(length(min = 1, max = 64))]
    slug: String,
    description: String,
}

impl InsertOneGroupReqJson {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Deserialize)]
pub struct FindOneGroupReqPath {
    slug: String,
}

impl FindOneGroupReqPath {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Deserialize)]
pub struct FindManyGroupReqQuery {
    page: Option<String>,
}

impl FindManyGroupReqQuery {
    pub fn page(&self) -> &Option<String> {
        &self.page
    }
}

#[derive(Deserialize)]
pub struct FindManyGroupPostReqPath {
    slug: String,
}

impl FindManyGroupPostReqPath {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Deserialize)]
pub struct FindManyGroupPostReqQuery {
    page: Option<String>,
}

impl FindManyGroupPostReqQuery {
    pub fn page(&self) -> &Option<String> {
        &self.page
    }
}

#[derive(Serialize)]
pub struct GroupResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    slug: String,
    description: String,
}

impl GroupResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            title: title.to_owned(),
            slug: slug.to_owned(),
            description: description.to_owned(),
        }
    }
}
