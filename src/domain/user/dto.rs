use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::user::{self, UserRole};

/// 회원 정보 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            user_id: model.user_id,
            email: model.email,
            name: model.name,
            phone: model.phone,
            role: model.role,
            created_at: model.created_at,
        }
    }
}

/// 권한 변경 요청 (관리자 전용)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    pub role: UserRole,
}

/// 회원 정보 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessUserResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: UserResponse,
}

/// 회원 목록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessUserListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<UserResponse>,
}
