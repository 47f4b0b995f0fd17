use actix_web::{
    http::{header, StatusCode},
    test,
};
use qb_dao::{comment::CommentDao, group::GroupDao, post::PostDao};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::tests::{ctx, image_form, signed_in_user, test_app, SMALL_GIF};

#[actix_web::test]
async fn thirteen_posts_split_into_pages_of_ten_and_three() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, _) = signed_in_user(&ctx, "leo").await;
    for i in 0..13 {
        PostDao::new(leo_data.id(), &None, &format!("post {i}"))
            .db_insert(ctx.dao().db())
            .await
            .unwrap();
    }

    let req = test::TestRequest::get().uri("/api/rest/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["count"], json!(10));
    assert_eq!(body["pagination"]["total"], json!(13));
    assert_eq!(body["pagination"]["page"], json!(1));
    assert_eq!(body["pagination"]["total_pages"], json!(2));
    assert_eq!(body["pagination"]["has_next"], json!(true));
    assert_eq!(body["pagination"]["has_previous"], json!(false));
    assert_eq!(body["data"][0]["text"], json!("post 12"));

    let req = test::TestRequest::get()
        .uri("/api/rest/posts?page=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["count"], json!(3));
    assert_eq!(body["pagination"]["page"], json!(2));
    assert_eq!(body["pagination"]["has_next"], json!(false));
    assert_eq!(body["pagination"]["has_previous"], json!(true));
    assert_eq!(body["data"][2]["text"], json!("post 0"));
}

#[actix_web::test]
async fn page_parameter_noise_is_tolerated() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, _) = signed_in_user(&ctx, "leo").await;
    for i in 0..13 {
        PostDao::new(leo_data.id(), &None, &format!("post {i}"))
            .db_insert(ctx.dao().db())
            .await
            .unwrap();
    }

    let req = test::TestRequest::get()
        .uri("/api/rest/posts?page=abc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["page"], json!(1));

    let req = test::TestRequest::get()
        .uri("/api/rest/posts?page=99")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["page"], json!(2));
    assert_eq!(body["pagination"]["count"], json!(3));

    let req = test::TestRequest::get()
        .uri("/api/rest/posts?page=0")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["page"], json!(1));
}

#[actix_web::test]
async fn create_requires_a_bearer_token() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let req = test::TestRequest::post()
        .uri("/api/rest/post")
        .set_json(json!({"text": "hello"}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn create_and_fetch_one() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (_, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::post()
        .uri("/api/rest/post")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"text": "hello"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["author_username"], json!("leo"));
    assert_eq!(body["data"]["group_slug"], Value::Null);
    let post_id = body["data"]["id"].as_str().unwrap().to_owned();

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{post_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["text"], json!("hello"));
}

#[actix_web::test]
async fn create_with_a_group_embeds_the_slug() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (_, token) = signed_in_user(&ctx, "leo").await;
    let group_data = GroupDao::new("Cats", "cats", "");
    group_data.db_insert(ctx.dao().db()).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/rest/post")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"text": "a cat post", "group_id": group_data.id()}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["group_slug"], json!("cats"));
}

#[actix_web::test]
async fn create_with_an_unknown_group_is_rejected() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (_, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::post()
        .uri("/api/rest/post")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"text": "hello", "group_id": Uuid::now_v7()}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_is_author_only() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, leo_token) = signed_in_user(&ctx, "leo").await;
    let (_, anna_token) = signed_in_user(&ctx, "anna").await;

    let post_data = PostDao::new(leo_data.id(), &None, "original");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/rest/post/{}", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {anna_token}")))
        .set_json(json!({"text": "hijacked"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/rest/post/{}", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {leo_token}")))
        .set_json(json!({"text": "edited"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["text"], json!("edited"));
}

#[actix_web::test]
async fn update_without_fields_is_rejected() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, token) = signed_in_user(&ctx, "leo").await;
    let post_data = PostDao::new(leo_data.id(), &None, "original");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/rest/post/{}", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_is_author_only_and_removes_comments() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, leo_token) = signed_in_user(&ctx, "leo").await;
    let (anna_data, anna_token) = signed_in_user(&ctx, "anna").await;

    let post_data = PostDao::new(leo_data.id(), &None, "to be deleted");
    post_data.db_insert(ctx.dao().db()).await.unwrap();
    CommentDao::new(post_data.id(), anna_data.id(), "nice")
        .db_insert(ctx.dao().db())
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rest/post/{}", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {anna_token}")))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rest/post/{}", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {leo_token}")))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}", post_data.id()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    assert!(
        CommentDao::db_select_many_by_post_id(ctx.dao().db(), post_data.id())
            .await
            .unwrap()
            .is_empty()
    );
}

#[actix_web::test]
async fn unknown_post_is_not_found() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}", Uuid::now_v7()))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn image_upload_serve_and_delete() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, token) = signed_in_user(&ctx, "leo").await;
    let post_data = PostDao::new(leo_data.id(), &None, "with image");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    let (content_type, form_body) = image_form("small.gif", "image/gif", SMALL_GIF);
    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/image", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(form_body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["image_name"], json!("small.gif"));
    assert_eq!(body["data"]["image_type"], json!("image/gif"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}/image", post_data.id()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/gif"
    );
    let bytes = test::read_body(res).await;
    assert_eq!(&bytes[..], SMALL_GIF);

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}", post_data.id()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["image_name"], json!("small.gif"));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rest/post/{}/image", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}/image", post_data.id()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn image_upload_is_author_only_and_image_only() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, leo_token) = signed_in_user(&ctx, "leo").await;
    let (_, anna_token) = signed_in_user(&ctx, "anna").await;

    let post_data = PostDao::new(leo_data.id(), &None, "with image");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    let (content_type, form_body) = image_form("small.gif", "image/gif", SMALL_GIF);
    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/image", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {anna_token}")))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(form_body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let (content_type, form_body) = image_form("notes.txt", "text/plain", b"just text");
    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/image", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {leo_token}")))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(form_body)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
