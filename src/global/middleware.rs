use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 헬스체크는 완료 로그를 debug로만 남김
const QUIET_PATHS: [&str; 1] = ["/health"];

/// 요청마다 request_id span을 열고 완료 로그를 남깁니다.
///
/// 클라이언트가 보낸 `x-request-id`가 있으면 그대로 쓰고, 응답 헤더로 돌려줍니다.
/// 5xx는 error, 4xx는 warn 레벨로 기록합니다.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %path,
    );

    async move {
        let started = Instant::now();
        let mut response = next.run(request).await;
        let duration_ms = started.elapsed().as_millis() as u64;
        let status = response.status();

        if status.is_server_error() {
            error!(status = status.as_u16(), duration_ms, "request failed");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), duration_ms, "request rejected");
        } else if QUIET_PATHS.contains(&path.as_str()) {
            debug!(status = status.as_u16(), duration_ms, "request completed");
        } else {
            info!(status = status.as_u16(), duration_ms, "request completed");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}
