use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

#[allow(unused_imports)]
use super::dto::{
    AuthTokenResponse, LoginRequest, SignupRequest, SuccessAuthTokenResponse,
    SuccessLogoutResponse,
};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::cookie::{clear_access_token_cookie, create_access_token_cookie};
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 회원가입 API
///
/// 투숙객 계정을 생성하고 Access Token을 발급합니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "회원가입 성공", body = SuccessAuthTokenResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 409, description = "이미 가입된 이메일", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Response, AppError> {
    req.validate()?;

    let result = AuthService::signup(&state, req).await?;

    with_token_cookie(result)
}

/// 로그인 API
///
/// 이메일과 비밀번호를 검증한 뒤 Access Token을 발급합니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = SuccessAuthTokenResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "이메일 또는 비밀번호 불일치", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AppError> {
    req.validate()?;

    let result = AuthService::login(&state, req).await?;

    with_token_cookie(result)
}

/// 로그아웃 API
///
/// access_token 쿠키를 만료시킵니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "로그아웃 성공", body = SuccessLogoutResponse)
    ),
    tag = "Auth"
)]
pub async fn logout() -> Result<Response, AppError> {
    let cookie = clear_access_token_cookie()?;

    Ok((
        [(SET_COOKIE, cookie)],
        Json(BaseResponse::empty("로그아웃되었습니다.")),
    )
        .into_response())
}

fn with_token_cookie(result: AuthTokenResponse) -> Result<Response, AppError> {
    let cookie = create_access_token_cookie(&result.access_token, result.expires_in)?;

    Ok(([(SET_COOKIE, cookie)], Json(BaseResponse::success(result))).into_response())
}
