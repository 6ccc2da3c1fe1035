use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

#[allow(unused_imports)]
use super::dto::{
    AvailabilityQuery, ChangeRoomStatusRequest, CreateRoomRequest, RoomQuery, RoomResponse,
    SuccessRoomListResponse, SuccessRoomResponse, UpdateRoomRequest,
};
use super::service::RoomService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 객실 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    params(RoomQuery),
    responses(
        (status = 200, description = "객실 목록 조회 성공", body = SuccessRoomListResponse)
    ),
    tag = "Room"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<BaseResponse<Vec<RoomResponse>>>, AppError> {
    let result = RoomService::list_rooms(&state, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 예약 가능 객실 검색 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms/available",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "예약 가능 객실 조회 성공", body = SuccessRoomListResponse),
        (status = 400, description = "잘못된 기간", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn search_available(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<BaseResponse<Vec<RoomResponse>>>, AppError> {
    let result = RoomService::search_available(&state, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 객실 상세 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}",
    params(
        ("room_id" = i64, Path, description = "객실 ID")
    ),
    responses(
        (status = 200, description = "객실 조회 성공", body = SuccessRoomResponse),
        (status = 404, description = "존재하지 않는 객실", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<BaseResponse<RoomResponse>>, AppError> {
    let result = RoomService::get_room(&state, room_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 객실 등록 API (관리자)
#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    request_body = CreateRoomRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "객실 등록 성공", body = SuccessRoomResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 409, description = "중복된 객실 번호", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn create_room(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<BaseResponse<RoomResponse>>, AppError> {
    user.require_admin()?;
    req.validate()?;

    let result = RoomService::create_room(&state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 객실 정보 수정 API (관리자)
#[utoipa::path(
    patch,
    path = "/api/v1/rooms/{room_id}",
    params(
        ("room_id" = i64, Path, description = "객실 ID")
    ),
    request_body = UpdateRoomRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "객실 수정 성공", body = SuccessRoomResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 객실", body = ErrorResponse),
        (status = 409, description = "중복된 객실 번호", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn update_room(
    State(state): State<AppState>,
    user: AuthUser,
    Path(room_id): Path<i64>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<BaseResponse<RoomResponse>>, AppError> {
    user.require_admin()?;
    req.validate()?;

    let result = RoomService::update_room(&state, room_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 객실 상태 변경 API (관리자)
///
/// AVAILABLE과 MAINTENANCE 사이에서만 변경할 수 있습니다.
/// OCCUPIED는 체크인/체크아웃으로만 전환됩니다.
#[utoipa::path(
    patch,
    path = "/api/v1/rooms/{room_id}/status",
    params(
        ("room_id" = i64, Path, description = "객실 ID")
    ),
    request_body = ChangeRoomStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "상태 변경 성공", body = SuccessRoomResponse),
        (status = 400, description = "허용되지 않는 상태", body = ErrorResponse),
        (status = 409, description = "투숙 중인 객실", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn change_room_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(room_id): Path<i64>,
    Json(req): Json<ChangeRoomStatusRequest>,
) -> Result<Json<BaseResponse<RoomResponse>>, AppError> {
    user.require_admin()?;

    let result = RoomService::change_status(&state, room_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 객실 삭제 API (관리자)
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{room_id}",
    params(
        ("room_id" = i64, Path, description = "객실 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "객실 삭제 성공"),
        (status = 404, description = "존재하지 않는 객실", body = ErrorResponse),
        (status = 409, description = "예약 기록이 있는 객실", body = ErrorResponse)
    ),
    tag = "Room"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    user: AuthUser,
    Path(room_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    user.require_admin()?;

    RoomService::delete_room(&state, room_id).await?;

    Ok(Json(BaseResponse::empty("객실이 삭제되었습니다.")))
}
