use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

#[allow(unused_imports)]
use super::dto::{
    ChangeReservationStatusRequest, CheckOutRequest, CreateReservationRequest, ReservationQuery,
    ReservationResponse, ReservationStatusResponse, StayResponse, SuccessReservationListResponse,
    SuccessReservationResponse, SuccessReservationStatusResponse, SuccessStayResponse,
    UpdateReservationRequest,
};
use super::service::ReservationService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 예약 생성 API
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    request_body = CreateReservationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "예약 성공", body = SuccessReservationResponse),
        (status = 400, description = "잘못된 기간 또는 인원", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 객실", body = ErrorResponse),
        (status = 409, description = "예약 불가 객실", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateReservationRequest>,
) -> Result<Json<BaseResponse<ReservationResponse>>, AppError> {
    req.validate()?;

    let result = ReservationService::create(&state, &user, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 예약 목록 조회 API
///
/// 관리자는 전체 예약을, 투숙객은 본인 예약만 조회합니다.
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    params(ReservationQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "예약 목록 조회 성공", body = SuccessReservationListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ReservationQuery>,
) -> Result<Json<BaseResponse<Vec<ReservationResponse>>>, AppError> {
    let result = ReservationService::list(&state, &user, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 예약 상세 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/reservations/{reservation_id}",
    params(
        ("reservation_id" = i64, Path, description = "예약 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "예약 조회 성공", body = SuccessReservationResponse),
        (status = 403, description = "접근 권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 예약", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reservation_id): Path<i64>,
) -> Result<Json<BaseResponse<ReservationResponse>>, AppError> {
    let result = ReservationService::get(&state, &user, reservation_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 예약 기간 변경 API
#[utoipa::path(
    patch,
    path = "/api/v1/reservations/{reservation_id}",
    params(
        ("reservation_id" = i64, Path, description = "예약 ID")
    ),
    request_body = UpdateReservationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "기간 변경 성공", body = SuccessReservationResponse),
        (status = 400, description = "변경 불가 상태", body = ErrorResponse),
        (status = 409, description = "기간 중복", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reservation_id): Path<i64>,
    Json(req): Json<UpdateReservationRequest>,
) -> Result<Json<BaseResponse<ReservationResponse>>, AppError> {
    req.validate()?;

    let result = ReservationService::update_dates(&state, &user, reservation_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 체크인 API (관리자)
#[utoipa::path(
    post,
    path = "/api/v1/reservations/{reservation_id}/check-in",
    params(
        ("reservation_id" = i64, Path, description = "예약 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "체크인 성공", body = SuccessReservationStatusResponse),
        (status = 400, description = "허용되지 않는 상태 전이", body = ErrorResponse),
        (status = 409, description = "이미 투숙 중이거나 점검 중인 객실", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn check_in(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reservation_id): Path<i64>,
) -> Result<Json<BaseResponse<ReservationStatusResponse>>, AppError> {
    user.require_admin()?;

    let result = ReservationService::check_in(&state, reservation_id).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "체크인되었습니다.",
    )))
}

/// 체크아웃 API (관리자)
///
/// 청구 금액을 생략하면 숙박일 수와 체크인 날짜 요금으로 청구서를 발행합니다.
#[utoipa::path(
    post,
    path = "/api/v1/reservations/{reservation_id}/check-out",
    params(
        ("reservation_id" = i64, Path, description = "예약 ID")
    ),
    request_body(content = CheckOutRequest, description = "청구 금액 (선택)"),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "체크아웃 성공", body = SuccessReservationStatusResponse),
        (status = 400, description = "허용되지 않는 상태 전이", body = ErrorResponse),
        (status = 404, description = "요금 정보 없음", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn check_out(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reservation_id): Path<i64>,
    body: Option<Json<CheckOutRequest>>,
) -> Result<Json<BaseResponse<ReservationStatusResponse>>, AppError> {
    user.require_admin()?;

    let Json(req) = body.unwrap_or_default();
    let result = ReservationService::check_out(&state, reservation_id, req.total_amount).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "체크아웃되었습니다.",
    )))
}

/// 예약 취소 API
#[utoipa::path(
    post,
    path = "/api/v1/reservations/{reservation_id}/cancel",
    params(
        ("reservation_id" = i64, Path, description = "예약 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "취소 성공", body = SuccessReservationStatusResponse),
        (status = 400, description = "취소할 수 없는 상태", body = ErrorResponse),
        (status = 403, description = "접근 권한 없음", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reservation_id): Path<i64>,
) -> Result<Json<BaseResponse<ReservationStatusResponse>>, AppError> {
    let result = ReservationService::cancel(&state, &user, reservation_id).await?;

    Ok(Json(BaseResponse::success_with_message(
        result,
        "예약이 취소되었습니다.",
    )))
}

/// 예약 상태 변경 API
///
/// 목표 상태에 따라 체크인, 체크아웃, 취소, 결제 완료 처리로 위임됩니다.
#[utoipa::path(
    patch,
    path = "/api/v1/reservations/{reservation_id}/status",
    params(
        ("reservation_id" = i64, Path, description = "예약 ID")
    ),
    request_body = ChangeReservationStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "상태 변경 성공", body = SuccessReservationStatusResponse),
        (status = 400, description = "허용되지 않는 상태 전이", body = ErrorResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "Reservation"
)]
pub async fn change_reservation_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reservation_id): Path<i64>,
    Json(req): Json<ChangeReservationStatusRequest>,
) -> Result<Json<BaseResponse<ReservationStatusResponse>>, AppError> {
    let result = ReservationService::change_status(&state, &user, reservation_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 예약의 투숙 기록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/reservations/{reservation_id}/stay",
    params(
        ("reservation_id" = i64, Path, description = "예약 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "투숙 기록 조회 성공", body = SuccessStayResponse),
        (status = 404, description = "체크인 전 예약", body = ErrorResponse)
    ),
    tag = "Stay"
)]
pub async fn get_reservation_stay(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reservation_id): Path<i64>,
) -> Result<Json<BaseResponse<StayResponse>>, AppError> {
    let result = ReservationService::get_stay_by_reservation(&state, &user, reservation_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 투숙 기록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/stays/{stay_id}",
    params(
        ("stay_id" = i64, Path, description = "투숙 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "투숙 기록 조회 성공", body = SuccessStayResponse),
        (status = 404, description = "존재하지 않는 투숙 기록", body = ErrorResponse)
    ),
    tag = "Stay"
)]
pub async fn get_stay(
    State(state): State<AppState>,
    user: AuthUser,
    Path(stay_id): Path<i64>,
) -> Result<Json<BaseResponse<StayResponse>>, AppError> {
    let result = ReservationService::get_stay(&state, &user, stay_id).await?;

    Ok(Json(BaseResponse::success(result)))
}
