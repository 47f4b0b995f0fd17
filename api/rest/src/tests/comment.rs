use actix_web::{
    http::{header, StatusCode},
    test,
};
use qb_dao::post::PostDao;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::tests::{ctx, signed_in_user, test_app};

#[actix_web::test]
async fn comment_requires_a_bearer_token() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, _) = signed_in_user(&ctx, "leo").await;
    let post_data = PostDao::new(leo_data.id(), &None, "a post");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/comment", post_data.id()))
        .set_json(json!({"text": "anonymous"}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn comment_on_a_missing_post_is_not_found() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (_, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/comment", Uuid::now_v7()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"text": "into the void"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}/comments", Uuid::now_v7()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn empty_comment_is_rejected() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, token) = signed_in_user(&ctx, "leo").await;
    let post_data = PostDao::new(leo_data.id(), &None, "a post");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/comment", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"text": ""}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn comments_are_listed_oldest_first_with_their_authors() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, leo_token) = signed_in_user(&ctx, "leo").await;
    let (_, anna_token) = signed_in_user(&ctx, "anna").await;

    let post_data = PostDao::new(leo_data.id(), &None, "a post");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/comment", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {anna_token}")))
        .set_json(json!({"text": "first!"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["author_username"], json!("anna"));

    let req = test::TestRequest::post()
        .uri(&format!("/api/rest/post/{}/comment", post_data.id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {leo_token}")))
        .set_json(json!({"text": "thanks"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}/comments", post_data.id()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total"], json!(2));
    assert_eq!(body["data"][0]["text"], json!("first!"));
    assert_eq!(body["data"][0]["author_username"], json!("anna"));
    assert_eq!(body["data"][1]["text"], json!("thanks"));
    assert_eq!(body["data"][1]["author_username"], json!("leo"));
}

#[actix_web::test]
async fn comment_pages_are_clamped_like_post_pages() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, token) = signed_in_user(&ctx, "leo").await;
    let post_data = PostDao::new(leo_data.id(), &None, "a post");
    post_data.db_insert(ctx.dao().db()).await.unwrap();

    for i in 0..13 {
        let req = test::TestRequest::post()
            .uri(&format!("/api/rest/post/{}/comment", post_data.id()))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .set_json(json!({"text": format!("comment {i}")}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/rest/post/{}/comments?page=9", post_data.id()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["page"], json!(2));
    assert_eq!(body["pagination"]["count"], json!(3));
    assert_eq!(body["pagination"]["total_pages"], json!(2));
    assert_eq!(body["data"][2]["text"], json!("comment 12"));
}
