use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use qb_dao::{dto::page::paginate, group::GroupDao, post::PostDao, user::UserDao};
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        group::{
            FindManyGroupPostReqPath, FindManyGroupPostReqQuery, FindManyGroupReqQuery,
            FindOneGroupReqPath, GroupResJson, InsertOneGroupReqJson,
        },
        PaginationRes, Response,
    },
    service::post::posts_res_json,
};

pub fn group_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/group", web::post().to(insert_one))
        .route("/group/{slug}", web::get().to(find_one))
        .route("/group/{slug}/posts", web::get().to(find_many_posts))
        .route("/groups", web::get().to(find_many));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<InsertOneGroupReqJson>,
) -> HttpResponse {
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

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    for char in data.slug().chars() {
        if !char.is_ascii_lowercase() && !char.is_ascii_digit() && char != '_' && char != '-' {
            return Response::error_raw(
                &StatusCode::BAD_REQUEST,
                "Slug must consist of lowercase letters, digits, '_' or '-'",
            );
        }
    }

    if GroupDao::db_select_by_slug(ctx.dao().db(), data.slug())
        .await
        .is_ok()
    {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "Slug has been used");
    }

    let group_data = GroupDao::new(data.title(), data.slug(), data.description());

    if let Err(err) = group_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &GroupResJson::new(
            group_data.id(),
            group_data.created_at(),
            group_data.updated_at(),
            group_data.title(),
            group_data.slug(),
            group_data.description(),
        ),
    )
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindOneGroupReqPath>,
) -> HttpResponse {
    let group_data = match GroupDao::db_select_by_slug(ctx.dao().db(), path.slug()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &GroupResJson::new(
            group_data.id(),
            group_data.created_at(),
            group_data.updated_at(),
            group_data.title(),
            group_data.slug(),
            group_data.description(),
        ),
    )
}

async fn find_many_posts(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindManyGroupPostReqPath>,
    query: web::Query<FindManyGroupPostReqQuery>,
) -> HttpResponse {
    let group_data = match GroupDao::db_select_by_slug(ctx.dao().db(), path.slug()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    let posts_data = match PostDao::db_select_many_by_group_id(ctx.dao().db(), group_data.id()).await
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

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyGroupReqQuery>,
) -> HttpResponse {
    let groups_data = match GroupDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let page = paginate(groups_data, query.page(), ctx.page_size());

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
        &page
            .items()
            .iter()
            .map(|data| {
                GroupResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.slug(),
                    data.description(),
                )
            })
            .collect::<Vec<_>>(),
    )
}
