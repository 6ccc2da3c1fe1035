use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

#[allow(unused_imports)]
use super::dto::{
    AssignEquipmentRequest, CreateEquipmentRequest, EquipmentQuery, EquipmentResponse,
    SuccessEquipmentListResponse, SuccessEquipmentResponse, UpdateEquipmentRequest,
};
use super::service::EquipmentService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 비품 목록 조회 API (관리자)
#[utoipa::path(
    get,
    path = "/api/v1/equipment",
    params(EquipmentQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "비품 목록 조회 성공", body = SuccessEquipmentListResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<EquipmentQuery>,
) -> Result<Json<BaseResponse<Vec<EquipmentResponse>>>, AppError> {
    user.require_admin()?;

    let result = EquipmentService::list_equipment(&state, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 객실 비품 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/equipment",
    params(
        ("room_id" = i64, Path, description = "객실 ID")
    ),
    responses(
        (status = 200, description = "객실 비품 조회 성공", body = SuccessEquipmentListResponse),
        (status = 404, description = "존재하지 않는 객실", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn list_room_equipment(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<EquipmentResponse>>>, AppError> {
    let result = EquipmentService::list_for_room(&state, room_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 비품 상세 조회 API (관리자)
#[utoipa::path(
    get,
    path = "/api/v1/equipment/{equipment_id}",
    params(
        ("equipment_id" = i64, Path, description = "비품 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "비품 조회 성공", body = SuccessEquipmentResponse),
        (status = 404, description = "존재하지 않는 비품", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(equipment_id): Path<i64>,
) -> Result<Json<BaseResponse<EquipmentResponse>>, AppError> {
    user.require_admin()?;

    let result = EquipmentService::get_equipment(&state, equipment_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 비품 등록 API (관리자)
#[utoipa::path(
    post,
    path = "/api/v1/equipment",
    request_body = CreateEquipmentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "비품 등록 성공", body = SuccessEquipmentResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 객실", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateEquipmentRequest>,
) -> Result<Json<BaseResponse<EquipmentResponse>>, AppError> {
    user.require_admin()?;
    req.validate()?;

    let result = EquipmentService::create_equipment(&state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 비품 수정 API (관리자)
#[utoipa::path(
    patch,
    path = "/api/v1/equipment/{equipment_id}",
    params(
        ("equipment_id" = i64, Path, description = "비품 ID")
    ),
    request_body = UpdateEquipmentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "비품 수정 성공", body = SuccessEquipmentResponse),
        (status = 404, description = "존재하지 않는 비품", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(equipment_id): Path<i64>,
    Json(req): Json<UpdateEquipmentRequest>,
) -> Result<Json<BaseResponse<EquipmentResponse>>, AppError> {
    user.require_admin()?;
    req.validate()?;

    let result = EquipmentService::update_equipment(&state, equipment_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 비품 삭제 API (관리자)
#[utoipa::path(
    delete,
    path = "/api/v1/equipment/{equipment_id}",
    params(
        ("equipment_id" = i64, Path, description = "비품 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "비품 삭제 성공"),
        (status = 404, description = "존재하지 않는 비품", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(equipment_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    user.require_admin()?;

    EquipmentService::delete_equipment(&state, equipment_id).await?;

    Ok(Json(BaseResponse::empty("비품이 삭제되었습니다.")))
}

/// 비품 객실 배치 API (관리자)
#[utoipa::path(
    put,
    path = "/api/v1/equipment/{equipment_id}/room",
    params(
        ("equipment_id" = i64, Path, description = "비품 ID")
    ),
    request_body = AssignEquipmentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "비품 배치 성공", body = SuccessEquipmentResponse),
        (status = 404, description = "존재하지 않는 비품 또는 객실", body = ErrorResponse),
        (status = 409, description = "다른 객실에 배치된 비품", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn assign_equipment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(equipment_id): Path<i64>,
    Json(req): Json<AssignEquipmentRequest>,
) -> Result<Json<BaseResponse<EquipmentResponse>>, AppError> {
    user.require_admin()?;

    let result = EquipmentService::assign(&state, equipment_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 비품 회수 API (관리자)
#[utoipa::path(
    delete,
    path = "/api/v1/equipment/{equipment_id}/room",
    params(
        ("equipment_id" = i64, Path, description = "비품 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "비품 회수 성공", body = SuccessEquipmentResponse),
        (status = 404, description = "존재하지 않는 비품", body = ErrorResponse)
    ),
    tag = "Equipment"
)]
pub async fn unassign_equipment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(equipment_id): Path<i64>,
) -> Result<Json<BaseResponse<EquipmentResponse>>, AppError> {
    user.require_admin()?;

    let result = EquipmentService::unassign(&state, equipment_id).await?;

    Ok(Json(BaseResponse::success(result)))
}
