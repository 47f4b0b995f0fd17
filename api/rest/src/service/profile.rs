use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use qb_dao::{dto::page::paginate, follow::FollowDao, post::PostDao, user::UserDao};

use crate::{
    context::ApiRestCtx,
    model::{
        profile::{
            FindManyProfilePostReqPath, FindManyProfilePostReqQuery, FindOneProfileReqPath,
            ProfileResJson,
        },
        PaginationRes, Response,
    },
    service::post::posts_res_json,
};

pub fn profile_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile/{username}", web::get().to(find_one))
        .route("/profile/{username}/posts", web::get().to(find_many_posts));
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    auth: Option<BearerAuth>,
    path: web::Path<FindOneProfileReqPath>,
) -> HttpResponse {
    let profile_data = match UserDao::db_select_by_username(ctx.dao().db(), path.username()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    let (posts_count, followers_count, following_count) = match tokio::try_join!(
        PostDao::db_count_many_by_author_id(ctx.dao().db(), profile_data.id()),
        FollowDao::db_count_many_by_author_id(ctx.dao().db(), profile_data.id()),
        FollowDao::db_count_many_by_user_id(ctx.dao().db(), profile_data.id())
    ) {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let is_following = match &auth {
        Some(auth) => {
            let token_claim = match ctx.token().jwt().decode(auth.token()) {
                Ok(token) => token,
                Err(err) => {
                    return Response::error_raw(&StatusCode::UNAUTHORIZED, &err.to_string())
                }
            };

            if let Err(err) = UserDao::db_select(ctx.dao().db(), token_claim.id()).await {
                return Response::error_raw(
                    &StatusCode::UNAUTHORIZED,
                    &format!("Failed to get user data: {err}"),
                );
            }

            Some(
                FollowDao::db_select_by_user_id_and_author_id(
                    ctx.dao().db(),
                    token_claim.id(),
                    profile_data.id(),
                )
                .await
                .is_ok(),
            )
        }
        None => None,
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &ProfileResJson::new(
            profile_data.id(),
            profile_data.created_at(),
            profile_data.username(),
            &posts_count,
            &followers_count,
            &following_count,
            &is_following,
        ),
    )
}

async fn find_many_posts(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindManyProfilePostReqPath>,
    query: web::Query<FindManyProfilePostReqQuery>,
) -> HttpResponse {
    let profile_data = match UserDao::db_select_by_username(ctx.dao().db(), path.username()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    let posts_data =
        match PostDao::db_select_many_by_author_id(ctx.dao().db(), profile_data.id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        };

    let page = paginate(posts_data, query.page(), ctx.page_size());

    let posts_res = match posts_res_json(ctx.dao().db(), page.items()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &page.items().len(),
            page.total_items(),
            page.number(),
            page.total_pages(),
            &page.has_next(),
            &page.has_previous(),
        )),
        &posts_res,
    )
}
