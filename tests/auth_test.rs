/// 인증/회원 API 통합 테스트
/// POST /api/v1/auth/signup, /login, /logout
/// GET /api/v1/users/me, GET /api/v1/users, PATCH /api/v1/users/{id}/role
mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use tower::util::ServiceExt;

use hotel_server::domain::user::entity::user::UserRole;
use hotel_server::domain::user::service::UserService;
use hotel_server::utils::jwt::encode_access_token;

use common::{spawn_app, ADMIN_EMAIL, ADMIN_PASSWORD};

#[tokio::test]
async fn should_signup_as_guest_and_return_token() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let (status, body) = app
        .post(
            "/api/v1/auth/signup",
            None,
            json!({
                "email": "guest@hotel.test",
                "password": "guest-password",
                "name": "홍길동",
                "phone": "010-1234-5678"
            }),
        )
        .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["code"], "COMMON200");
    assert_eq!(body["result"]["user"]["role"], "GUEST");
    assert!(body["result"]["accessToken"].as_str().unwrap().len() > 20);
    assert!(body["result"]["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let app = spawn_app().await;
    app.guest_token("dup@hotel.test").await;

    let (status, body) = app
        .post(
            "/api/v1/auth/signup",
            None,
            json!({ "email": "dup@hotel.test", "password": "another-pass", "name": "중복" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "USER4091");
}

#[tokio::test]
async fn should_reject_invalid_signup_payload() {
    let app = spawn_app().await;

    let (status, body) = app
        .post(
            "/api/v1/auth/signup",
            None,
            json!({ "email": "not-an-email", "password": "short", "name": "x" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["code"], "COMMON400");
}

#[tokio::test]
async fn should_fail_login_with_wrong_password_or_unknown_email() {
    let app = spawn_app().await;
    app.guest_token("login@hotel.test").await;

    let (status, body) = app
        .post(
            "/api/v1/auth/login",
            None,
            json!({ "email": "login@hotel.test", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH4011");

    let (status, body) = app
        .post(
            "/api/v1/auth/login",
            None,
            json!({ "email": "nobody@hotel.test", "password": "whatever-pass" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH4011");
}

#[tokio::test]
async fn should_set_cookie_on_login_and_accept_it() {
    // Arrange
    let app = spawn_app().await;
    app.guest_token("cookie@hotel.test").await;

    let login = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "email": "cookie@hotel.test", "password": "guest-password" }).to_string(),
        ))
        .unwrap();

    // Act
    let response = app.router.clone().oneshot(login).await.unwrap();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let cookie_pair = set_cookie.split(';').next().unwrap().to_string();

    let me = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users/me")
        .header(header::COOKIE, cookie_pair)
        .body(Body::empty())
        .unwrap();
    let me_response = app.router.clone().oneshot(me).await.unwrap();

    // Assert
    assert!(set_cookie.starts_with("access_token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert_eq!(me_response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_require_token_for_profile() {
    let app = spawn_app().await;

    let (status, body) = app.get("/api/v1/users/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH4001");

    let (status, _) = app.get("/api/v1/users/me", Some("garbage.token.value")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_return_own_profile() {
    let app = spawn_app().await;
    let token = app.guest_token("me@hotel.test").await;

    let (status, body) = app.get("/api/v1/users/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["email"], "me@hotel.test");
}

#[tokio::test]
async fn should_restrict_user_list_to_admin() {
    let app = spawn_app().await;
    let guest = app.guest_token("plain@hotel.test").await;
    let admin = app.admin_token().await;

    let (status, body) = app.get("/api/v1/users", Some(&guest)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "COMMON403");

    let (status, body) = app.get("/api/v1/users", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_promote_guest_to_admin() {
    // Arrange
    let app = spawn_app().await;
    let guest = app.guest_token("promote@hotel.test").await;
    let admin = app.admin_token().await;
    let (_, me) = app.get("/api/v1/users/me", Some(&guest)).await;
    let user_id = me["result"]["userId"].as_i64().unwrap();

    // Act
    let (status, body) = app
        .patch(
            &format!("/api/v1/users/{}/role", user_id),
            Some(&admin),
            json!({ "role": "ADMIN" }),
        )
        .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["role"], "ADMIN");
}

#[tokio::test]
async fn should_clear_cookie_on_logout() {
    let app = spawn_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/logout")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn should_report_healthy_database() {
    let app = spawn_app().await;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], true);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn should_refuse_admin_bootstrap_over_guest_account() {
    // Arrange: 관리자 이메일로 먼저 가입한 일반 회원
    let app = spawn_app().await;
    let guest = app.guest_token(ADMIN_EMAIL).await;

    // Act
    let result = UserService::ensure_admin(&app.state, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    // Assert
    let err = result.unwrap_err();
    assert_eq!(err.error_code(), "USER4091");

    let (status, me) = app.get("/api/v1/users/me", Some(&guest)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["result"]["role"], "GUEST");

    // 설정된 관리자 비밀번호로는 로그인 불가
    let (login_status, _) = app
        .post(
            "/api/v1/auth/login",
            None,
            json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
        )
        .await;
    assert_eq!(login_status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_apply_role_change_to_already_issued_token() {
    // Arrange
    let app = spawn_app().await;
    let admin = app.admin_token().await;
    let staff = app.guest_token("staff@hotel.test").await;
    let (_, me) = app.get("/api/v1/users/me", Some(&staff)).await;
    let role_uri = format!("/api/v1/users/{}/role", me["result"]["userId"]);

    // Act: 승격
    app.patch(&role_uri, Some(&admin), json!({ "role": "ADMIN" }))
        .await;
    let (promoted_status, _) = app.get("/api/v1/users", Some(&staff)).await;

    // Act: 강등
    app.patch(&role_uri, Some(&admin), json!({ "role": "GUEST" }))
        .await;
    let (demoted_status, demoted_body) = app.get("/api/v1/users", Some(&staff)).await;

    // Assert: 토큰 재발급 없이 즉시 반영
    assert_eq!(promoted_status, StatusCode::OK);
    assert_eq!(demoted_status, StatusCode::FORBIDDEN);
    assert_eq!(demoted_body["code"], "COMMON403");
}

#[tokio::test]
async fn should_reject_token_of_unknown_user() {
    // Arrange: 존재하지 않는 회원에게 발급된 토큰
    let app = spawn_app().await;
    let token = encode_access_token(
        9999,
        UserRole::Admin,
        &app.state.config.jwt_secret,
        app.state.config.jwt_expiration,
    )
    .unwrap();

    // Act
    let (status, _) = app.get("/api/v1/users", Some(&token)).await;

    // Assert
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

