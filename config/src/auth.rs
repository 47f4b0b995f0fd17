use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthConfig {
    open_registration: bool,
}

impl AuthConfig {
    pub fn open_registration(&self) -> &bool {
        &self.open_registration
    }
}
