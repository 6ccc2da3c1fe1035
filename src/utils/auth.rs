use axum::{
    async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::header::COOKIE,
    http::request::Parts,
};

use crate::domain::user::entity::user::UserRole;
use crate::domain::user::repository::UserRepository;
use crate::state::AppState;
use crate::utils::cookie::ACCESS_TOKEN_COOKIE;
use crate::utils::error::AppError;
use crate::utils::jwt::{decode_access_token, Claims};

/// 인증된 사용자 정보를 담는 Extractor
///
/// 토큰의 `role` 클레임 대신 요청 시점의 DB 권한을 담습니다.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// JWT Claims에서 사용자 ID를 추출합니다.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("유효하지 않은 사용자 ID입니다."))
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == UserRole::Admin
    }

    /// 관리자 권한이 없으면 403
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("관리자 권한이 필요합니다."))
        }
    }

    /// 본인 리소스이거나 관리자인 경우만 허용
    pub fn require_owner_or_admin(&self, owner_id: i64) -> Result<(), AppError> {
        if self.is_admin() || self.user_id()? == owner_id {
            Ok(())
        } else {
            Err(AppError::forbidden("접근 권한이 없습니다."))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출 시도
        let token = if let Some(auth_header) = parts.headers.get(AUTHORIZATION) {
            let auth_header_str = auth_header
                .to_str()
                .map_err(|_| AppError::unauthorized("잘못된 헤더 형식입니다."))?;

            auth_header_str
                .strip_prefix("Bearer ")
                .ok_or_else(|| {
                    AppError::unauthorized("토큰 형식이 올바르지 않습니다.")
                })?
                .to_string()
        } else {
            // 2. 쿠키에서 토큰 추출 시도
            extract_token_from_cookie(parts)?
        };

        let mut claims = decode_access_token(&token, &state.config.jwt_secret)?;

        // 권한은 토큰이 아니라 현재 DB 값을 따름 (권한 변경 즉시 반영)
        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("유효하지 않은 사용자 ID입니다."))?;
        let user = UserRepository::find_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("존재하지 않는 사용자입니다."))?;
        claims.role = user.role;

        Ok(AuthUser(claims))
    }
}

/// 쿠키에서 access_token 추출
fn extract_token_from_cookie(parts: &Parts) -> Result<String, AppError> {
    let cookie_header = parts
        .headers
        .get(COOKIE)
        .ok_or_else(|| AppError::unauthorized("로그인이 필요합니다."))?;

    let cookie_str = cookie_header
        .to_str()
        .map_err(|_| AppError::unauthorized("잘못된 쿠키 형식입니다."))?;

    // 쿠키 파싱: "name1=value1; name2=value2" 형식
    for cookie in cookie_str.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", ACCESS_TOKEN_COOKIE)) {
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    Err(AppError::unauthorized("로그인이 필요합니다."))
}
