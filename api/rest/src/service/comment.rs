use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use futures::future;
use qb_dao::{comment::CommentDao, dto::page::paginate, post::PostDao, user::UserDao};
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        comment::{
            CommentResJson, FindManyCommentReqPath, FindManyCommentReqQuery,
            InsertOneCommentReqJson, InsertOneCommentReqPath,
        },
        PaginationRes, Response,
    },
};

pub fn comment_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/post/{post_id}/comment", web::post().to(insert_one))
        .route("/post/{post_id}/comments", web::get().to(find_many));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<InsertOneCommentReqPath>,
    data: web::Json<InsertOneCommentReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

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

    let post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    let comment_data = CommentDao::new(post_data.id(), user_data.id(), data.text());

    if let Err(err) = comment_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &CommentResJson::new(
            comment_data.id(),
            comment_data.created_at(),
            comment_data.post_id(),
            comment_data.author_id(),
            user_data.username(),
            comment_data.text(),
        ),
    )
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindManyCommentReqPath>,
    query: web::Query<FindManyCommentReqQuery>,
) -> HttpResponse {
    let post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    let comments_data =
        match CommentDao::db_select_many_by_post_id(ctx.dao().db(), post_data.id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
        };

    let page = paginate(comments_data, query.page(), ctx.page_size());

    let mut author_ids = HashSet::with_capacity(page.items().len());
    for comment_data in page.items() {
        author_ids.insert(*comment_data.author_id());
    }

    let authors_data = match future::try_join_all(
        author_ids
            .iter()
            .map(|author_id| UserDao::db_select(ctx.dao().db(), author_id)),
    )
    .await
    {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let mut authors = HashMap::with_capacity(authors_data.len());
    for author_data in &authors_data {
        authors.insert(*author_data.id(), author_data);
    }

    let mut comments_res = Vec::with_capacity(page.items().len());
    for comment_data in page.items() {
        let author_data = match authors.get(comment_data.author_id()) {
            Some(data) => data,
            None => {
                return Response::error_raw(
                    &StatusCode::BAD_REQUEST,
                    &format!("Author '{}' doesn't exist", comment_data.author_id()),
                )
            }
        };
        comments_res.push(CommentResJson::new(
            comment_data.id(),
            comment_data.created_at(),
            comment_data.post_id(),
            comment_data.author_id(),
            author_data.username(),
            comment_data.text(),
        ));
    }

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
        &comments_res,
    )
}
