use std::fs;

use actix_web::web;
use qb_dao::{user::UserDao, Db};
use qb_db_sqlite::db::SqliteDb;
use qb_hash_argon2::argon2::Argon2Hash;
use qb_token_jwt::token::JwtToken;
use uuid::Uuid;

use crate::context::{ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestTokenCtx};

mod auth;
mod comment;
mod post;
mod profile;
mod user;

const TEST_SALT: &str = "cXVpbGxiYXNlc2FsdA";
const TEST_PASSWORD: &str = "sup3rsecret";

const SMALL_GIF: &[u8] = b"\x47\x49\x46\x38\x39\x61\x02\x00\x01\x00\x80\x00\x00\x00\x00\x00\
\xff\xff\xff\x21\xf9\x04\x00\x00\x00\x00\x00\x2c\x00\x00\x00\x00\x02\x00\x01\x00\x00\x02\x02\
\x0c\x0a\x00\x3b";

macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_web::middleware::ErrorHandlers::new()
                        .default_handler(crate::error_handler::default_error_handler),
                )
                .app_data($ctx.clone())
                .configure(crate::configure::configure),
        )
        .await
    };
}

pub(crate) use test_app;

pub(crate) async fn ctx() -> web::Data<ApiRestCtx> {
    ctx_with(true, 10).await
}

pub(crate) async fn ctx_with(open_registration: bool, page_size: usize) -> web::Data<ApiRestCtx> {
    let db = Db::SqliteDb(SqliteDb::new(":memory:", &1).await);

    let media_path = std::env::temp_dir()
        .join(format!("quillbase_test_{}", Uuid::now_v7()))
        .to_string_lossy()
        .to_string();
    fs::create_dir_all(&media_path).unwrap();

    web::Data::new(ApiRestCtx::new(
        ApiRestHashCtx::new(Argon2Hash::new("Argon2id", "V0x13", TEST_SALT)),
        ApiRestTokenCtx::new(JwtToken::new("test_secret", &3600)),
        ApiRestDaoCtx::new(db),
        open_registration,
        page_size,
        media_path,
    ))
}

pub(crate) async fn signed_in_user(ctx: &ApiRestCtx, username: &str) -> (UserDao, String) {
    let password_hash = ctx
        .hash()
        .argon2()
        .hash_password(TEST_PASSWORD.as_bytes())
        .unwrap()
        .to_string();

    let user_data = UserDao::new(username, &format!("{username}@mail.test"), &password_hash);
    user_data.db_insert(ctx.dao().db()).await.unwrap();

    let token = ctx.token().jwt().encode(user_data.id()).unwrap();

    (user_data, token)
}

pub(crate) fn image_form(file_name: &str, content_type: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = "qbtestboundary";

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; \
filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
