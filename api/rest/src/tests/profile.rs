use actix_web::{
    http::{header, StatusCode},
    test,
};
use qb_dao::{follow::FollowDao, post::PostDao};
use serde_json::{json, Value};

use crate::tests::{ctx, signed_in_user, test_app};

#[actix_web::test]
async fn profile_reports_counts() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, _) = signed_in_user(&ctx, "leo").await;
    let (anna_data, _) = signed_in_user(&ctx, "anna").await;
    let (mark_data, _) = signed_in_user(&ctx, "mark").await;

    for i in 0..3 {
        PostDao::new(leo_data.id(), &None, &format!("post {i}"))
            .db_insert(ctx.dao().db())
            .await
            .unwrap();
    }
    FollowDao::new(anna_data.id(), leo_data.id())
        .db_insert(ctx.dao().db())
        .await
        .unwrap();
    FollowDao::new(mark_data.id(), leo_data.id())
        .db_insert(ctx.dao().db())
        .await
        .unwrap();
    FollowDao::new(leo_data.id(), anna_data.id())
        .db_insert(ctx.dao().db())
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/rest/profile/leo")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["username"], json!("leo"));
    assert_eq!(body["data"]["posts_count"], json!(3));
    assert_eq!(body["data"]["followers_count"], json!(2));
    assert_eq!(body["data"]["following_count"], json!(1));
    assert_eq!(body["data"]["is_following"], Value::Null);
}

#[actix_web::test]
async fn profile_reports_whether_the_caller_follows() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, _) = signed_in_user(&ctx, "leo").await;
    let (anna_data, anna_token) = signed_in_user(&ctx, "anna").await;

    FollowDao::new(anna_data.id(), leo_data.id())
        .db_insert(ctx.dao().db())
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/rest/profile/leo")
        .insert_header((header::AUTHORIZATION, format!("Bearer {anna_token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["is_following"], json!(true));

    let req = test::TestRequest::get()
        .uri("/api/rest/profile/anna")
        .insert_header((header::AUTHORIZATION, format!("Bearer {anna_token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["is_following"], json!(false));
}

#[actix_web::test]
async fn unknown_profile_is_not_found() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let req = test::TestRequest::get()
        .uri("/api/rest/profile/nobody")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn profile_posts_contain_only_that_author() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, _) = signed_in_user(&ctx, "leo").await;
    let (anna_data, _) = signed_in_user(&ctx, "anna").await;

    PostDao::new(leo_data.id(), &None, "by leo")
        .db_insert(ctx.dao().db())
        .await
        .unwrap();
    PostDao::new(anna_data.id(), &None, "by anna")
        .db_insert(ctx.dao().db())
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/rest/profile/leo/posts")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["pagination"]["total"], json!(1));
    assert_eq!(body["data"][0]["text"], json!("by leo"));
    assert_eq!(body["data"][0]["author_username"], json!("leo"));
}
