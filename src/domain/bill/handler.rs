use axum::{
    extract::{Path, Query, State},
    Json,
};

#[allow(unused_imports)]
use super::dto::{
    AddPaymentRequest, BillQuery, BillResponse, IssueBillRequest, PaymentResponse,
    PaymentResultResponse, SuccessBillListResponse, SuccessBillResponse,
    SuccessPaymentListResponse, SuccessPaymentResultResponse,
};
use super::service::BillService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 청구서 수동 발행 API (관리자, 청구서가 없는 종료된 투숙 복구용)
#[utoipa::path(
    post,
    path = "/api/v1/bills",
    request_body = IssueBillRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "청구서 발행 성공", body = SuccessBillResponse),
        (status = 400, description = "종료되지 않은 투숙", body = ErrorResponse),
        (status = 404, description = "요금 정보 없음", body = ErrorResponse),
        (status = 409, description = "이미 발행된 청구서", body = ErrorResponse)
    ),
    tag = "Bill"
)]
pub async fn issue_bill(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<IssueBillRequest>,
) -> Result<Json<BaseResponse<BillResponse>>, AppError> {
    user.require_admin()?;

    let result = BillService::issue(&state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 청구서 목록 조회 API (관리자)
#[utoipa::path(
    get,
    path = "/api/v1/bills",
    params(BillQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "청구서 목록 조회 성공", body = SuccessBillListResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "Bill"
)]
pub async fn list_bills(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<BillQuery>,
) -> Result<Json<BaseResponse<Vec<BillResponse>>>, AppError> {
    user.require_admin()?;

    let result = BillService::list_bills(&state, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 청구서 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/bills/{bill_id}",
    params(
        ("bill_id" = i64, Path, description = "청구서 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "청구서 조회 성공", body = SuccessBillResponse),
        (status = 403, description = "접근 권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 청구서", body = ErrorResponse)
    ),
    tag = "Bill"
)]
pub async fn get_bill(
    State(state): State<AppState>,
    user: AuthUser,
    Path(bill_id): Path<i64>,
) -> Result<Json<BaseResponse<BillResponse>>, AppError> {
    let result = BillService::get_bill(&state, &user, bill_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 투숙 기록의 청구서 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/stays/{stay_id}/bill",
    params(
        ("stay_id" = i64, Path, description = "투숙 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "청구서 조회 성공", body = SuccessBillResponse),
        (status = 404, description = "청구서 없음", body = ErrorResponse)
    ),
    tag = "Bill"
)]
pub async fn get_stay_bill(
    State(state): State<AppState>,
    user: AuthUser,
    Path(stay_id): Path<i64>,
) -> Result<Json<BaseResponse<BillResponse>>, AppError> {
    let result = BillService::get_bill_by_stay(&state, &user, stay_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 결제 등록 API
///
/// 남은 금액을 초과하는 결제는 거절됩니다.
#[utoipa::path(
    post,
    path = "/api/v1/bills/{bill_id}/payments",
    params(
        ("bill_id" = i64, Path, description = "청구서 ID")
    ),
    request_body = AddPaymentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "결제 등록 성공", body = SuccessPaymentResultResponse),
        (status = 400, description = "결제 거절", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 청구서", body = ErrorResponse)
    ),
    tag = "Bill"
)]
pub async fn add_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(bill_id): Path<i64>,
    Json(req): Json<AddPaymentRequest>,
) -> Result<Json<BaseResponse<PaymentResultResponse>>, AppError> {
    let result = BillService::add_payment(&state, &user, bill_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 결제 내역 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/bills/{bill_id}/payments",
    params(
        ("bill_id" = i64, Path, description = "청구서 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "결제 내역 조회 성공", body = SuccessPaymentListResponse),
        (status = 404, description = "존재하지 않는 청구서", body = ErrorResponse)
    ),
    tag = "Bill"
)]
pub async fn list_payments(
    State(state): State<AppState>,
    user: AuthUser,
    Path(bill_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<PaymentResponse>>>, AppError> {
    let result = BillService::list_payments(&state, &user, bill_id).await?;

    Ok(Json(BaseResponse::success(result)))
}
