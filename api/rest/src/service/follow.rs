use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use qb_dao::{dto::page::paginate, follow::FollowDao, post::PostDao, user::UserDao};

use crate::{
    context::ApiRestCtx,
    model::{
        follow::{
            DeleteOneFollowReqPath, FindManyFeedPostReqQuery, FollowResJson,
            InsertOneFollowReqPath, UnfollowResJson,
        },
        PaginationRes, Response,
    },
    service::post::posts_res_json,
};

pub fn follow_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile/{username}/follow", web::post().to(insert_one))
        .route("/profile/{username}/follow", web::delete().to(delete_one))
        .route("/feed", web::get().to(find_many_posts));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<InsertOneFollowReqPath>,
) -> HttpResponse {
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

    let author_data = match UserDao::db_select_by_username(ctx.dao().db(), path.username()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    if author_data.id() == user_data.id() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Cannot follow yourself");
    }

    if let Ok(follow_data) = FollowDao::db_select_by_user_id_and_author_id(
        ctx.dao().db(),
        user_data.id(),
        author_data.id(),
    )
    .await
    {
        return Response::data(
            &StatusCode::OK,
            &None,
            &FollowResJson::new(
                follow_data.id(),
                follow_data.created_at(),
                follow_data.user_id(),
                follow_data.author_id(),
            ),
        );
    }

    let follow_data = FollowDao::new(user_data.id(), author_data.id());

    if let Err(err) = follow_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &FollowResJson::new(
            follow_data.id(),
            follow_data.created_at(),
            follow_data.user_id(),
            follow_data.author_id(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneFollowReqPath>,
) -> HttpResponse {
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

    let author_data = match UserDao::db_select_by_username(ctx.dao().db(), path.username()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    if let Err(err) = FollowDao::db_delete_by_user_id_and_author_id(
        ctx.dao().db(),
        user_data.id(),
        author_data.id(),
    )
    .await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &UnfollowResJson::new(user_data.id(), author_data.id()),
    )
}

async fn find_many_posts(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    query: web::Query<FindManyFeedPostReqQuery>,
) -> HttpResponse {
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

    let posts_data = match PostDao::db_select_many_by_follower(ctx.dao().db(), user_data.id()).await
    {
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
