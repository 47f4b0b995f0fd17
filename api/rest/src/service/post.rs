use actix_files::NamedFile;
use actix_multipart::form::MultipartForm;
use actix_web::{
    http::{
        header::{self, HeaderValue},
        StatusCode,
    },
    web, HttpRequest, HttpResponse,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use anyhow::{Error, Result};
use futures::future;
use qb_dao::{dto::page::paginate, group::GroupDao, post::PostDao, user::UserDao, Db};
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        post::{
            DeleteOnePostImageReqPath, DeleteOnePostReqPath, FindManyPostReqQuery,
            FindOnePostImageReqPath, FindOnePostReqPath, InsertOnePostReqJson, PostIDResJson,
            PostImageResJson, PostResJson, SaveOnePostImageReqForm, SaveOnePostImageReqPath,
            UpdateOnePostReqJson, UpdateOnePostReqPath,
        },
        PaginationRes, Response,
    },
};

pub fn post_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/post", web::post().to(insert_one))
        .route("/post/{post_id}", web::get().to(find_one))
        .route("/post/{post_id}", web::patch().to(update_one))
        .route("/post/{post_id}", web::delete().to(delete_one))
        .route("/post/{post_id}/image", web::post().to(save_one_image))
        .route("/post/{post_id}/image", web::get().to(find_one_image))
        .route("/post/{post_id}/image", web::delete().to(delete_one_image))
        .route("/posts", web::get().to(find_many));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<InsertOnePostReqJson>,
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

    let group_data = match data.group_id() {
        Some(group_id) => match GroupDao::db_select(ctx.dao().db(), group_id).await {
            Ok(data) => Some(data),
            Err(_) => return Response::error_raw(&StatusCode::BAD_REQUEST, "Group doesn't exist"),
        },
        None => None,
    };

    let post_data = PostDao::new(user_data.id(), data.group_id(), data.text());

    if let Err(err) = post_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &PostResJson::new(
            post_data.id(),
            post_data.created_at(),
            post_data.updated_at(),
            post_data.author_id(),
            user_data.username(),
            post_data.group_id(),
            &group_data
                .as_ref()
                .map(|group_data| group_data.slug().to_owned()),
            post_data.text(),
            post_data.image_name(),
            &None,
        ),
    )
}

async fn find_one(ctx: web::Data<ApiRestCtx>, path: web::Path<FindOnePostReqPath>) -> HttpResponse {
    let post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    let author_data = match UserDao::db_select(ctx.dao().db(), post_data.author_id()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(
                &StatusCode::BAD_REQUEST,
                &format!("Failed to get author data: {err}"),
            )
        }
    };

    let group_data = match post_data.group_id() {
        Some(group_id) => match GroupDao::db_select(ctx.dao().db(), group_id).await {
            Ok(data) => Some(data),
            Err(err) => {
                return Response::error_raw(
                    &StatusCode::BAD_REQUEST,
                    &format!("Failed to get group data: {err}"),
                )
            }
        },
        None => None,
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &PostResJson::new(
            post_data.id(),
            post_data.created_at(),
            post_data.updated_at(),
            post_data.author_id(),
            author_data.username(),
            post_data.group_id(),
            &group_data
                .as_ref()
                .map(|group_data| group_data.slug().to_owned()),
            post_data.text(),
            post_data.image_name(),
            &post_data
                .image_type()
                .as_ref()
                .map(|image_type| image_type.to_string()),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOnePostReqPath>,
    data: web::Json<UpdateOnePostReqJson>,
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

    let mut post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    if post_data.author_id() != user_data.id() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "This post does not belong to you");
    }

    if data.is_all_none() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "No data provided to update");
    }

    if let Some(group_id) = data.group_id() {
        if GroupDao::db_select(ctx.dao().db(), group_id).await.is_err() {
            return Response::error_raw(&StatusCode::BAD_REQUEST, "Group doesn't exist");
        }
        post_data.set_group_id(&Some(*group_id));
    }

    if let Some(text) = data.text() {
        post_data.set_text(text);
    }

    if let Err(err) = post_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    let group_data = match post_data.group_id() {
        Some(group_id) => match GroupDao::db_select(ctx.dao().db(), group_id).await {
            Ok(data) => Some(data),
            Err(err) => {
                return Response::error_raw(
                    &StatusCode::BAD_REQUEST,
                    &format!("Failed to get group data: {err}"),
                )
            }
        },
        None => None,
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &PostResJson::new(
            post_data.id(),
            post_data.created_at(),
            post_data.updated_at(),
            post_data.author_id(),
            user_data.username(),
            post_data.group_id(),
            &group_data
                .as_ref()
                .map(|group_data| group_data.slug().to_owned()),
            post_data.text(),
            post_data.image_name(),
            &post_data
                .image_type()
                .as_ref()
                .map(|image_type| image_type.to_string()),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOnePostReqPath>,
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

    let post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    if post_data.author_id() != user_data.id() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "This post does not belong to you");
    }

    if let Err(err) = PostDao::delete(ctx.dao().db(), ctx.media_path(), post_data.id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(&StatusCode::OK, &None, &PostIDResJson::new(post_data.id()))
}

async fn save_one_image(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<SaveOnePostImageReqPath>,
    form: MultipartForm<SaveOnePostImageReqForm>,
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

    let mut post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    if post_data.author_id() != user_data.id() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "This post does not belong to you");
    }

    let content_type = match form.content_type() {
        Some(content_type) => content_type,
        None => {
            return Response::error_raw(&StatusCode::BAD_REQUEST, "Image content type is required")
        }
    };

    if content_type.type_() != mime::IMAGE {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            "Image content type must be image/*",
        );
    }

    let image_name = match form.image_name() {
        Some(name) => name.to_owned(),
        None => post_data.id().to_string(),
    };

    if let Err(err) = post_data
        .save_image(
            ctx.dao().db(),
            ctx.media_path(),
            &image_name,
            content_type,
            form.image_path(),
        )
        .await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &PostImageResJson::new(post_data.id(), &image_name, &content_type.to_string()),
    )
}

async fn find_one_image(
    ctx: web::Data<ApiRestCtx>,
    req: HttpRequest,
    path: web::Path<FindOnePostImageReqPath>,
) -> HttpResponse {
    let post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    let (image_name, image_type) = match (post_data.image_name(), post_data.image_type()) {
        (Some(image_name), Some(image_type)) => (image_name, image_type),
        _ => return Response::error_raw(&StatusCode::NOT_FOUND, "Post doesn't have an image"),
    };

    let file = match NamedFile::open_async(&format!(
        "{}/{}",
        ctx.media_path(),
        post_data.id()
    ))
    .await
    {
        Ok(file) => file,
        Err(err) => return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    };

    let mut res = file.into_response(&req);
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&image_type.to_string()).unwrap(),
    );
    res.headers_mut().insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("inline; filename=\"{image_name}\"")).unwrap(),
    );
    res
}

async fn delete_one_image(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOnePostImageReqPath>,
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

    let mut post_data = match PostDao::db_select(ctx.dao().db(), path.post_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_raw(&StatusCode::NOT_FOUND, &err.to_string()),
    };

    if post_data.author_id() != user_data.id() {
        return Response::error_raw(&StatusCode::FORBIDDEN, "This post does not belong to you");
    }

    if post_data.image_name().is_none() {
        return Response::error_raw(&StatusCode::NOT_FOUND, "Post doesn't have an image");
    }

    if let Err(err) = post_data.delete_image(ctx.dao().db(), ctx.media_path()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(&StatusCode::OK, &None, &PostIDResJson::new(post_data.id()))
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyPostReqQuery>,
) -> HttpResponse {
    let posts_data = match PostDao::db_select_many(ctx.dao().db()).await {
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

pub(crate) async fn posts_res_json(db: &Db, posts_data: &[PostDao]) -> Result<Vec<PostResJson>> {
    let mut author_ids = HashSet::with_capacity(posts_data.len());
    let mut group_ids = HashSet::new();
    for post_data in posts_data {
        author_ids.insert(*post_data.author_id());
        if let Some(group_id) = post_data.group_id() {
            group_ids.insert(*group_id);
        }
    }

    let (authors_data, groups_data) = tokio::try_join!(
        future::try_join_all(
            author_ids
                .iter()
                .map(|author_id| UserDao::db_select(db, author_id))
        ),
        future::try_join_all(
            group_ids
                .iter()
                .map(|group_id| GroupDao::db_select(db, group_id))
        )
    )?;

    let mut authors = HashMap::with_capacity(authors_data.len());
    for author_data in &authors_data {
        authors.insert(*author_data.id(), author_data);
    }
    let mut groups = HashMap::with_capacity(groups_data.len());
    for group_data in &groups_data {
        groups.insert(*group_data.id(), group_data);
    }

    let mut posts_res = Vec::with_capacity(posts_data.len());
    for post_data in posts_data {
        let author_data = match authors.get(post_data.author_id()) {
            Some(data) => data,
            None => {
                return Err(Error::msg(format!(
                    "Author '{}' doesn't exist",
                    post_data.author_id()
                )))
            }
        };
        let group_slug = match post_data.group_id() {
            Some(group_id) => match groups.get(group_id) {
                Some(data) => Some(data.slug().to_owned()),
                None => return Err(Error::msg(format!("Group '{group_id}' doesn't exist"))),
            },
            None => None,
        };
        posts_res.push(PostResJson::new(
            post_data.id(),
            post_data.created_at(),
            post_data.updated_at(),
            post_data.author_id(),
            author_data.username(),
            post_data.group_id(),
            &group_slug,
            post_data.text(),
            post_data.image_name(),
            &post_data
                .image_type()
                .as_ref()
                .map(|image_type| image_type.to_string()),
        ));
    }

    Ok(posts_res)
}
