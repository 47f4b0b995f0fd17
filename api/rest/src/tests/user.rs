use actix_web::{
    http::{header, StatusCode},
    test,
};
use qb_dao::{comment::CommentDao, follow::FollowDao, post::PostDao};
use serde_json::{json, Value};

use crate::tests::{ctx, signed_in_user, test_app};

#[actix_web::test]
async fn account_routes_require_a_bearer_token() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let req = test::TestRequest::get().uri("/api/rest/user").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"]["status"], json!("Unauthorized"));
}

#[actix_web::test]
async fn update_changes_email() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (_, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::patch()
        .uri("/api/rest/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"email": "new@mail.test"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["email"], json!("new@mail.test"));
}

#[actix_web::test]
async fn update_changes_password_used_for_login() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (_, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::patch()
        .uri("/api/rest/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"password": "an0ther-secret"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/rest/auth/password-based")
        .set_json(json!({"email": "leo@mail.test", "password": "an0ther-secret"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn update_without_fields_is_rejected() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (_, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::patch()
        .uri("/api/rest/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_rejects_an_email_registered_to_another_account() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    signed_in_user(&ctx, "anna").await;
    let (_, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::patch()
        .uri("/api/rest/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"email": "anna@mail.test"}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_removes_the_account_and_its_traces() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (leo_data, leo_token) = signed_in_user(&ctx, "leo").await;
    let (anna_data, _) = signed_in_user(&ctx, "anna").await;

    let leo_post = PostDao::new(leo_data.id(), &None, "leo writes");
    leo_post.db_insert(ctx.dao().db()).await.unwrap();
    let anna_post = PostDao::new(anna_data.id(), &None, "anna writes");
    anna_post.db_insert(ctx.dao().db()).await.unwrap();

    CommentDao::new(anna_post.id(), leo_data.id(), "from leo")
        .db_insert(ctx.dao().db())
        .await
        .unwrap();
    FollowDao::new(leo_data.id(), anna_data.id())
        .db_insert(ctx.dao().db())
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri("/api/rest/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {leo_token}")))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    assert!(PostDao::db_select(ctx.dao().db(), leo_post.id())
        .await
        .is_err());
    assert!(
        CommentDao::db_select_many_by_post_id(ctx.dao().db(), anna_post.id())
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        FollowDao::db_count_many_by_author_id(ctx.dao().db(), anna_data.id())
            .await
            .unwrap(),
        0
    );

    let req = test::TestRequest::get()
        .uri("/api/rest/profile/leo")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
