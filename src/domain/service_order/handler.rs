use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

#[allow(unused_imports)]
use super::dto::{
    ChangeServiceOrderStatusRequest, CreateServiceOrderRequest, ServiceOrderResponse,
    SuccessServiceOrderListResponse, SuccessServiceOrderResponse,
};
use super::service::ServiceOrderService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 서비스 주문 API
#[utoipa::path(
    post,
    path = "/api/v1/stays/{stay_id}/service-orders",
    params(
        ("stay_id" = i64, Path, description = "투숙 ID")
    ),
    request_body = CreateServiceOrderRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "주문 접수 성공", body = SuccessServiceOrderResponse),
        (status = 400, description = "종료된 투숙", body = ErrorResponse),
        (status = 403, description = "접근 권한 없음", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 투숙 기록", body = ErrorResponse)
    ),
    tag = "ServiceOrder"
)]
pub async fn create_service_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(stay_id): Path<i64>,
    Json(req): Json<CreateServiceOrderRequest>,
) -> Result<Json<BaseResponse<ServiceOrderResponse>>, AppError> {
    req.validate()?;

    let result = ServiceOrderService::create(&state, &user, stay_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 투숙 기록의 서비스 주문 목록 API
#[utoipa::path(
    get,
    path = "/api/v1/stays/{stay_id}/service-orders",
    params(
        ("stay_id" = i64, Path, description = "투숙 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "주문 목록 조회 성공", body = SuccessServiceOrderListResponse),
        (status = 404, description = "존재하지 않는 투숙 기록", body = ErrorResponse)
    ),
    tag = "ServiceOrder"
)]
pub async fn list_service_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Path(stay_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<ServiceOrderResponse>>>, AppError> {
    let result = ServiceOrderService::list_for_stay(&state, &user, stay_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 서비스 주문 상태 변경 API (관리자)
#[utoipa::path(
    patch,
    path = "/api/v1/service-orders/{service_order_id}/status",
    params(
        ("service_order_id" = i64, Path, description = "서비스 주문 ID")
    ),
    request_body = ChangeServiceOrderStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "상태 변경 성공", body = SuccessServiceOrderResponse),
        (status = 400, description = "허용되지 않는 상태 전이", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 주문", body = ErrorResponse)
    ),
    tag = "ServiceOrder"
)]
pub async fn change_service_order_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(service_order_id): Path<i64>,
    Json(req): Json<ChangeServiceOrderStatusRequest>,
) -> Result<Json<BaseResponse<ServiceOrderResponse>>, AppError> {
    user.require_admin()?;

    let result = ServiceOrderService::change_status(&state, service_order_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}
