use serde::Deserialize;

#[derive(Deserialize)]
pub struct AppConfig {
    page_size: usize,
}

impl AppConfig {
    pub fn page_size(&self) -> &usize {
        &self.page_size
    }
}
