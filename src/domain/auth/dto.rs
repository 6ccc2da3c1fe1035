use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::dto::UserResponse;

/// 회원가입 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: String,

    /// 비밀번호 (8~64자)
    #[validate(length(min = 8, max = 64, message = "비밀번호는 8~64자 이내로 입력해야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1~50자 이내로 입력해야 합니다"))]
    pub name: String,

    #[validate(length(max = 20, message = "전화번호는 20자를 초과할 수 없습니다"))]
    pub phone: Option<String>,
}

/// 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 로그인/회원가입 응답 DTO
/// 토큰은 본문과 access_token 쿠키로 함께 전달됩니다.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenResponse {
    pub access_token: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
    pub user: UserResponse,
}

/// 로그인 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessAuthTokenResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: AuthTokenResponse,
}

/// 로그아웃 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessLogoutResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}
