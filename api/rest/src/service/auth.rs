use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use qb_dao::user::UserDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        auth::{AuthTokenResJson, PasswordBasedReqJson, RegisterReqJson, RegisterResJson},
        Response,
    },
};

pub fn auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register))
        .route("/auth/password-based", web::post().to(password_based))
        .route("/auth/token", web::get().to(token));
}

async fn register(ctx: web::Data<ApiRestCtx>, data: web::Json<RegisterReqJson>) -> HttpResponse {
    if !ctx.open_registration() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "Registration is disabled");
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    for char in data.username().chars() {
        if !char.is_ascii_lowercase() && !char.is_ascii_digit() && char != '_' && char != '-' {
            return Response::error_raw(
                &StatusCode::BAD_REQUEST,
                "Username must consist of lowercase letters, digits, '_' or '-'",
            );
        }
    }

    if UserDao::db_select_by_username(ctx.dao().db(), data.username())
        .await
        .is_ok()
    {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Username has been taken");
    }

    if UserDao::db_select_by_email(ctx.dao().db(), data.email())
        .await
        .is_ok()
    {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Email address has been registered");
    }

    let password_hash = match ctx
        .hash()
        .argon2()
        .hash_password(data.password().as_bytes())
    {
        Ok(hash) => hash,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let user_data = UserDao::new(data.username(), data.email(), &password_hash.to_string());

    if let Err(err) = user_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &RegisterResJson::new(user_data.id()),
    )
}

async fn password_based(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<PasswordBasedReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let user_data = match UserDao::db_select_by_email(ctx.dao().db(), data.email()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    if let Err(err) = ctx
        .hash()
        .argon2()
        .verify_password(data.password(), user_data.password_hash())
    {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let token = match ctx.token().jwt().encode(user_data.id()) {
        Ok(token) => token,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &None, &AuthTokenResJson::new(&token))
}

async fn token(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::UNAUTHORIZED, &err.to_string()),
    };

    if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        return Response::error_raw(
            &StatusCode::UNAUTHORIZED,
            &format!("Failed to get user data: {err}"),
        );
    }

    let token = match ctx.token().jwt().need_renew(&token_claim) {
        Ok(need) => {
            if need {
                match ctx.token().jwt().renew(&token_claim) {
                    Ok(token) => token,
                    Err(err) => {
                        return Response::error_raw(
                            &StatusCode::INTERNAL_SERVER_ERROR,
                            &err.to_string(),
                        )
                    }
                }
            } else {
                token.to_owned()
            }
        }
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &None, &AuthTokenResJson::new(&token))
}
