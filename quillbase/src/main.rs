use qb_api_rest::{
    context::{ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestTokenCtx},
    ApiRestServer,
};
use qb_dao::Db;
use qb_db_postgresql::db::PostgresDb;
use qb_db_sqlite::db::SqliteDb;
use qb_hash_argon2::argon2::Argon2Hash;
use qb_token_jwt::token::JwtToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = qb_config::from_path(&config_path);

    qb_log::init(config.log().display_level(), config.log().level_filter());

    qb_log::info(Some("🚀"), "[Quillbase] Starting");

    if *config.app().page_size() < 1 {
        qb_log::panic(None, "[Quillbase] Page size must be greater than zero");
    }

    let argon2_hash = Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
        config.hash().argon2().salt(),
    );

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().expiry_duration(),
    );

    let db = if let Some(postgres) = config.db().postgres() {
        Db::PostgresqlDb(
            PostgresDb::new(
                postgres.user(),
                postgres.password(),
                postgres.host(),
                postgres.port(),
                postgres.db_name(),
                postgres.max_connections(),
            )
            .await,
        )
    } else if let Some(sqlite) = config.db().sqlite() {
        Db::SqliteDb(SqliteDb::new(sqlite.path(), sqlite.max_connections()).await)
    } else {
        qb_log::panic(None, "[Quillbase] No database configuration is specified");
        return;
    };

    let api_rest_server = ApiRestServer::new(
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        ApiRestCtx::new(
            ApiRestHashCtx::new(argon2_hash),
            ApiRestTokenCtx::new(jwt_token),
            ApiRestDaoCtx::new(db),
            *config.auth().open_registration(),
            *config.app().page_size(),
            config.media().path().to_owned(),
        ),
    );

    match api_rest_server.run().await {
        Ok(_) => qb_log::info(Some("👋"), "[Quillbase] Turned off"),
        Err(err) => qb_log::warn(
            Some("👋"),
            format!("[Quillbase] Turned off with error: {err}"),
        ),
    }
}
