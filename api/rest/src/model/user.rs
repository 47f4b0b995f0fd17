use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct UpdateOneUserReqJson {
    #[validate(email)]
    email: Option<String>,
    #[validate(length(min = 8))]
    password: Option<String>,
}

impl UpdateOneUserReqJson {
    pub fn email(&self) -> &Option<String> {
        &self.email
    }

    pub fn password(&self) -> &Option<String> {
        &self.password
    }

    pub fn is_all_none(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Serialize)]
pub struct UserResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    username: String,
    email: String,
}

impl UserResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        username: &str,
        email: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            username: username.to_owned(),
            email: email.to_owned(),
        }
    }
}

#[derive(Serialize)]
pub struct UserIDResJson {
    id: Uuid,
}

impl UserIDResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
