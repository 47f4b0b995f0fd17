use serde::Deserialize;

#[derive(Deserialize)]
pub struct MediaConfig {
    path: String,
}

impl MediaConfig {
    pub fn path(&self) -> &str {
        &self.path
    }
}
