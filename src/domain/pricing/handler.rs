use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

#[allow(unused_imports)]
use super::dto::{
    AddPriceRequest, PriceQuery, PriceResponse, ResolvedPriceResponse, SuccessPriceListResponse,
    SuccessPriceResponse, SuccessResolvedPriceResponse,
};
use super::service::PricingService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::{BaseResponse, ErrorResponse};

/// 객실 요금 이력 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/prices",
    params(
        ("room_id" = i64, Path, description = "객실 ID")
    ),
    responses(
        (status = 200, description = "요금 이력 조회 성공", body = SuccessPriceListResponse),
        (status = 404, description = "존재하지 않는 객실", body = ErrorResponse)
    ),
    tag = "Pricing"
)]
pub async fn list_prices(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<PriceResponse>>>, AppError> {
    let result = PricingService::list_prices(&state, room_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 요금 구간 등록 API (관리자)
///
/// 같은 객실에 기간이 겹치는 요금 구간은 등록할 수 없습니다.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/prices",
    params(
        ("room_id" = i64, Path, description = "객실 ID")
    ),
    request_body = AddPriceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "요금 등록 성공", body = SuccessPriceResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse),
        (status = 409, description = "기간 중복", body = ErrorResponse)
    ),
    tag = "Pricing"
)]
pub async fn add_price(
    State(state): State<AppState>,
    user: AuthUser,
    Path(room_id): Path<i64>,
    Json(req): Json<AddPriceRequest>,
) -> Result<Json<BaseResponse<PriceResponse>>, AppError> {
    user.require_admin()?;

    let result = PricingService::add_price(&state, room_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 요금 구간 삭제 API (관리자)
#[utoipa::path(
    delete,
    path = "/api/v1/prices/{price_history_id}",
    params(
        ("price_history_id" = i64, Path, description = "요금 구간 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "요금 삭제 성공"),
        (status = 404, description = "존재하지 않는 요금 구간", body = ErrorResponse)
    ),
    tag = "Pricing"
)]
pub async fn delete_price(
    State(state): State<AppState>,
    user: AuthUser,
    Path(price_history_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    user.require_admin()?;

    PricingService::delete_price(&state, price_history_id).await?;

    Ok(Json(BaseResponse::empty("요금 구간이 삭제되었습니다.")))
}

/// 특정 날짜 1박 요금 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/price",
    params(
        ("room_id" = i64, Path, description = "객실 ID"),
        PriceQuery
    ),
    responses(
        (status = 200, description = "요금 조회 성공", body = SuccessResolvedPriceResponse),
        (status = 404, description = "해당 날짜 요금 없음", body = ErrorResponse)
    ),
    tag = "Pricing"
)]
pub async fn resolve_price(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<BaseResponse<ResolvedPriceResponse>>, AppError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let result = PricingService::resolve_price(&state, room_id, date).await?;

    Ok(Json(BaseResponse::success(result)))
}
