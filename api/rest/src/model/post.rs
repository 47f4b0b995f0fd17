use std::path::Path;

use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use chrono::{DateTime, Utc};
use mime::Mime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOnePostReqJson {
    group_id: Option<Uuid>,
    #[validate(length(min = 1))]
    text: String,
}

impl InsertOnePostReqJson {
    pub fn group_id(&self) -> &Option<Uuid> {
        &self.group_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Deserialize)]
pub struct FindOnePostReqPath {
    post_id: Uuid,
}

impl FindOnePostReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(Deserialize)]
pub struct FindManyPostReqQuery {
    page: Option<String>,
}

impl FindManyPostReqQuery {
    pub fn page(&self) -> &Option<String> {
        &self.page
    }
}

#[derive(Deserialize)]
pub struct UpdateOnePostReqPath {
    post_id: Uuid,
}

impl UpdateOnePostReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOnePostReqJson {
    group_id: Option<Uuid>,
    #[validate(length(min = 1))]
    text: Option<String>,
}

impl UpdateOnePostReqJson {
    pub fn group_id(&self) -> &Option<Uuid> {
        &self.group_id
    }

    pub fn text(&self) -> &Option<String> {
        &self.text
    }

    pub fn is_all_none(&self) -> bool {
        self.group_id.is_none() && self.text.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOnePostReqPath {
    post_id: Uuid,
}

impl DeleteOnePostReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(Deserialize)]
pub struct SaveOnePostImageReqPath {
    post_id: Uuid,
}

impl SaveOnePostImageReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(MultipartForm)]
pub struct SaveOnePostImageReqForm {
    image: TempFile,
}

impl SaveOnePostImageReqForm {
    pub fn image_path(&self) -> &Path {
        self.image.file.path()
    }

    pub fn image_name(&self) -> &Option<String> {
        &self.image.file_name
    }

    pub fn content_type(&self) -> &Option<Mime> {
        &self.image.content_type
    }
}

#[derive(Deserialize)]
pub struct FindOnePostImageReqPath {
    post_id: Uuid,
}

impl FindOnePostImageReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(Deserialize)]
pub struct DeleteOnePostImageReqPath {
    post_id: Uuid,
}

impl DeleteOnePostImageReqPath {
    pub fn post_id(&self) -> &Uuid {
        &self.post_id
    }
}

#[derive(Serialize)]
pub struct PostResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: Uuid,
    author_username: String,
    group_id: Option<Uuid>,
    group_slug: Option<String>,
    text: String,
    image_name: Option<String>,
    image_type: Option<String>,
}

impl PostResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        author_id: &Uuid,
        author_username: &str,
        group_id: &Option<Uuid>,
        group_slug: &Option<String>,
        text: &str,
        image_name: &Option<String>,
        image_type: &Option<String>,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            author_id: *author_id,
            author_username: author_username.to_owned(),
            group_id: *group_id,
            group_slug: group_slug.to_owned(),
            text: text.to_owned(),
            image_name: image_name.to_owned(),
            image_type: image_type.to_owned(),
        }
    }
}

#[derive(Serialize)]
pub struct PostIDResJson {
    id: Uuid,
}

impl PostIDResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

#[derive(Serialize)]
pub struct PostImageResJson {
    post_id: Uuid,
    image_name: String,
    image_type: String,
}

impl PostImageResJson {
    pub fn new(post_id: &Uuid, image_name: &str, image_type: &str) -> Self {
        Self {
            post_id: *post_id,
            image_name: image_name.to_owned(),
            image_type: image_type.to_owned(),
        }
    }
}
