use actix_web::{
    http::{header, StatusCode},
    test,
};
use serde_json::{json, Value};

use crate::tests::{ctx, ctx_with, signed_in_user, test_app, TEST_PASSWORD};

#[actix_web::test]
async fn register_login_and_fetch_own_account() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let req = test::TestRequest::post()
        .uri("/api/rest/auth/register")
        .set_json(json!({
            "username": "leo",
            "email": "leo@mail.test",
            "password": TEST_PASSWORD,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert!(body["data"]["id"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/rest/auth/password-based")
        .set_json(json!({"email": "leo@mail.test", "password": TEST_PASSWORD}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let token = body["data"]["token"].as_str().unwrap().to_owned();

    let req = test::TestRequest::get()
        .uri("/api/rest/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["username"], json!("leo"));
    assert_eq!(body["data"]["email"], json!("leo@mail.test"));
}

#[actix_web::test]
async fn register_is_refused_when_registration_is_disabled() {
    let ctx = ctx_with(false, 10).await;
    let app = test_app!(&ctx);

    let req = test::TestRequest::post()
        .uri("/api/rest/auth/register")
        .set_json(json!({
            "username": "leo",
            "email": "leo@mail.test",
            "password": TEST_PASSWORD,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn register_rejects_invalid_payloads() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let payloads = [
        json!({"username": "leo", "email": "not-an-email", "password": TEST_PASSWORD}),
        json!({"username": "leo", "email": "leo@mail.test", "password": "short"}),
        json!({"username": "ab", "email": "leo@mail.test", "password": TEST_PASSWORD}),
        json!({"username": "Leo!", "email": "leo@mail.test", "password": TEST_PASSWORD}),
    ];

    for payload in payloads {
        let req = test::TestRequest::post()
            .uri("/api/rest/auth/register")
            .set_json(payload)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn register_rejects_duplicate_username_and_email() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::post()
        .uri("/api/rest/auth/register")
        .set_json(json!({
            "username": "leo",
            "email": "other@mail.test",
            "password": TEST_PASSWORD,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/rest/auth/register")
        .set_json(json!({
            "username": "other",
            "email": "leo@mail.test",
            "password": TEST_PASSWORD,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_rejects_a_wrong_password() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::post()
        .uri("/api/rest/auth/password-based")
        .set_json(json!({"email": "leo@mail.test", "password": "wrongpassword"}))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn token_endpoint_returns_a_usable_token() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let (user_data, token) = signed_in_user(&ctx, "leo").await;

    let req = test::TestRequest::get()
        .uri("/api/rest/auth/token")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;

    let returned = body["data"]["token"].as_str().unwrap();
    let claim = ctx.token().jwt().decode(returned).unwrap();
    assert_eq!(claim.id(), user_data.id());
}

#[actix_web::test]
async fn token_endpoint_rejects_a_garbage_token() {
    let ctx = ctx().await;
    let app = test_app!(&ctx);

    let req = test::TestRequest::get()
        .uri("/api/rest/auth/token")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
