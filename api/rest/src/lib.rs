use actix_cors::Cors;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use configure::configure;
use context::ApiRestCtx;
use error_handler::default_error_handler;
use logger::logger_format;

mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod service;

#[cfg(test)]
mod tests;

pub struct ApiRestServer {
    address: String,
    allowed_origin: Option<String>,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(host: &str, port: &u16, allowed_origin: &Option<String>, ctx: ApiRestCtx) -> Self {
        qb_log::info(Some("⚡"), "ApiRestServer: Initializing component");

        let address = format!("{}:{}", host, port);
        let context = web::Data::new(ctx);

        Self {
            address,
            allowed_origin: allowed_origin.to_owned(),
            context,
        }
    }

    pub async fn run(self) -> Result<()> {
        qb_log::info(Some("💫"), "ApiRestServer: Running component");

        Ok(HttpServer::new(move || {
            let cors = match &self.allowed_origin {
                Some(allowed_origin) => Cors::default()
                    .allowed_origin(allowed_origin)
                    .allow_any_method()
                    .allow_any_header(),
                None => Cors::permissive(),
            };
            App::new()
                .wrap(Logger::new(logger_format()))
                .wrap(cors)
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .app_data(self.context.clone())
                .configure(configure)
        })
        .bind(self.address)?
        .run()
        .await?)
    }
}
