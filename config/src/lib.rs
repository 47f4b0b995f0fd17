use std::fs::File;

use serde::Deserialize;

use self::{
    api::ApiConfig, app::AppConfig, auth::AuthConfig, db::DbConfig, hash::HashConfig,
    log::LogConfig, media::MediaConfig, token::TokenConfig,
};

pub mod api;
pub mod app;
pub mod auth;
pub mod db;
pub mod hash;
pub mod log;
pub mod media;
pub mod token;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    app: AppConfig,
    media: MediaConfig,
    auth: AuthConfig,
    hash: HashConfig,
    token: TokenConfig,
    db: DbConfig,
    api: ApiConfig,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn media(&self) -> &MediaConfig {
        &self.media
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("Failed to open configuration file '{path}': {err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("Failed to parse configuration file '{path}': {err}"),
    }
}
