use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use qb_dao::user::UserDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        user::{UpdateOneUserReqJson, UserIDResJson, UserResJson},
        Response,
    },
};

pub fn user_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::get().to(find_one))
        .route("/user", web::patch().to(update_one))
        .route("/user", web::delete().to(delete_one));
}

async fn find_one(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::UNAUTHORIZED, &err.to_string()),
    };

    let user_data = match UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(
                &StatusCode::UNAUTHORIZED,
                &format!("Failed to get user data: {err}"),
            )
        }
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &UserResJson::new(
            user_data.id(),
            user_data.created_at(),
            user_data.updated_at(),
            user_data.username(),
            user_data.email(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<UpdateOneUserReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::UNAUTHORIZED, &err.to_string()),
    };

    let mut user_data = match UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(
                &StatusCode::UNAUTHORIZED,
                &format!("Failed to get user data: {err}"),
            )
        }
    };

    if data.is_all_none() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "No data provided to update");
    }

    if let Some(email) = data.email() {
        if let Ok(existing_data) = UserDao::db_select_by_email(ctx.dao().db(), email).await {
            if existing_data.id() != user_data.id() {
                return Response::error_raw(
                    &StatusCode::BAD_REQUEST,
                    "Email address has been registered",
                );
            }
        }
        user_data.set_email(email);
    }

    if let Some(password) = data.password() {
        let password_hash = match ctx.hash().argon2().hash_password(password.as_bytes()) {
            Ok(hash) => hash,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };
        user_data.set_password_hash(&password_hash.to_string());
    }

    if let Err(err) = user_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &UserResJson::new(
            user_data.id(),
            user_data.created_at(),
            user_data.updated_at(),
            user_data.username(),
            user_data.email(),
        ),
    )
}

async fn delete_one(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    let token_claim = match ctx.token().jwt().decode(token) {
        Ok(token) => token,
        Err(err) => return Response::error_raw(&StatusCode::UNAUTHORIZED, &err.to_string()),
    };

    let user_data = match UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(
                &StatusCode::UNAUTHORIZED,
                &format!("Failed to get user data: {err}"),
            )
        }
    };

    if let Err(err) = UserDao::delete(ctx.dao().db(), ctx.media_path(), user_data.id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(&StatusCode::OK, &None, &UserIDResJson::new(user_data.id()))
}
