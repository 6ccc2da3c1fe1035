//! 통합 테스트 공용 헬퍼
//!
//! 테스트마다 in-memory SQLite DB를 새로 만들고 실제 라우터를 그대로 사용합니다.

#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use hotel_server::config::{create_tables, AppConfig};
use hotel_server::domain::user::UserService;
use hotel_server::{app, AppState};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use std::str::FromStr;
use tower::util::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@hotel.test";
pub const ADMIN_PASSWORD: &str = "admin-password";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub async fn spawn_app() -> TestApp {
    // 커넥션이 1개여야 in-memory DB가 유지됨
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    create_tables(&db).await.unwrap();

    let config = AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_expiration: 3600,
        schema_update: false,
        admin_email: None,
        admin_password: None,
    };

    let state = AppState::new(db, config);

    TestApp {
        router: app(state.clone()),
        state,
    }
}

impl TestApp {
    /// JSON 요청을 보내고 상태 코드와 응답 본문을 돌려줍니다.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, token, Some(body)).await
    }

    /// 관리자 계정을 준비하고 로그인 토큰을 반환
    pub async fn admin_token(&self) -> String {
        UserService::ensure_admin(&self.state, ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .unwrap();

        let (status, body) = self
            .post(
                "/api/v1/auth/login",
                None,
                json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "admin login failed: {}", body);

        body["result"]["accessToken"].as_str().unwrap().to_string()
    }

    /// 투숙객 회원가입 후 토큰 반환
    pub async fn guest_token(&self, email: &str) -> String {
        let (status, body) = self
            .post(
                "/api/v1/auth/signup",
                None,
                json!({ "email": email, "password": "guest-password", "name": "투숙객" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", body);

        body["result"]["accessToken"].as_str().unwrap().to_string()
    }

    pub async fn create_room(&self, admin: &str, room_number: &str, capacity: i32) -> i64 {
        let (status, body) = self
            .post(
                "/api/v1/rooms",
                Some(admin),
                json!({ "roomNumber": room_number, "roomType": "DOUBLE", "capacity": capacity }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "room creation failed: {}", body);

        body["result"]["roomId"].as_i64().unwrap()
    }

    /// 오늘부터 종료일 없이 적용되는 요금 등록
    pub async fn add_open_price(&self, admin: &str, room_id: i64, price: &str) {
        let (status, body) = self
            .post(
                &format!("/api/v1/rooms/{}/prices", room_id),
                Some(admin),
                json!({ "price": price, "startDate": today() }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "price creation failed: {}", body);
    }

    pub async fn reserve(
        &self,
        token: &str,
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> (StatusCode, Value) {
        self.post(
            "/api/v1/reservations",
            Some(token),
            json!({
                "roomId": room_id,
                "checkIn": check_in,
                "checkOut": check_out,
                "guestCount": 2
            }),
        )
        .await
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    today() + chrono::Duration::days(days)
}

/// SQLite는 소수 자릿수를 보존하지 않으므로 값으로 비교합니다.
pub fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("not a decimal: {}", other),
    }
}

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}
