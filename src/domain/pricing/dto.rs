use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::entity::price_history;

/// 요금 구간 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub price_history_id: i64,
    pub room_id: i64,
    #[schema(value_type = String, example = "120000.00")]
    pub price: Decimal,
    pub start_date: NaiveDate,
    /// 없으면 종료일 없는 요금
    pub end_date: Option<NaiveDate>,
}

impl From<price_history::Model> for PriceResponse {
    fn from(model: price_history::Model) -> Self {
        Self {
            price_history_id: model.price_history_id,
            room_id: model.room_id,
            price: model.price,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}

/// 요금 구간 등록 요청 (관리자)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddPriceRequest {
    #[schema(value_type = String, example = "120000.00")]
    pub price: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// 특정 날짜 요금 조회 파라미터 (기본값: 오늘)
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    pub date: Option<NaiveDate>,
}

/// 특정 날짜 1박 요금 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPriceResponse {
    pub room_id: i64,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "120000.00")]
    pub price_per_night: Decimal,
}

/// 요금 구간 등록 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPriceResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: PriceResponse,
}

/// 요금 이력 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPriceListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<PriceResponse>,
}

/// 날짜별 요금 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResolvedPriceResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ResolvedPriceResponse,
}
