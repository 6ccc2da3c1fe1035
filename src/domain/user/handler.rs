use axum::{
    extract::{Path, State},
    Json,
};

#[allow(unused_imports)]
use super::dto::{ChangeRoleRequest, SuccessUserListResponse, SuccessUserResponse, UserResponse};
use super::service::UserService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 로그인된 사용자 프로필 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "프로필 조회 성공", body = SuccessUserResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<UserResponse>>, AppError> {
    let user_id = user.user_id()?;
    let profile = UserService::get_profile(&state, user_id).await?;

    Ok(Json(BaseResponse::success(profile)))
}

/// 회원 목록 조회 API (관리자)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "회원 목록 조회 성공", body = SuccessUserListResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<Vec<UserResponse>>>, AppError> {
    user.require_admin()?;

    let users = UserService::list_users(&state).await?;

    Ok(Json(BaseResponse::success(users)))
}

/// 회원 권한 변경 API (관리자)
#[utoipa::path(
    patch,
    path = "/api/v1/users/{user_id}/role",
    params(
        ("user_id" = i64, Path, description = "회원 ID")
    ),
    request_body = ChangeRoleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "권한 변경 성공", body = SuccessUserResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn change_role(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<i64>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<BaseResponse<UserResponse>>, AppError> {
    user.require_admin()?;

    let result = UserService::change_role(&state, user_id, req.role).await?;

    Ok(Json(BaseResponse::success(result)))
}
