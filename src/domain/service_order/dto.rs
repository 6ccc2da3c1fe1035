use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::service_order::{self, ServiceOrderStatus};

/// 서비스 주문 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderResponse {
    pub service_order_id: i64,
    pub stay_id: i64,
    pub description: String,
    #[schema(value_type = String, example = "15000.00")]
    pub amount: Decimal,
    pub status: ServiceOrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<service_order::Model> for ServiceOrderResponse {
    fn from(model: service_order::Model) -> Self {
        Self {
            service_order_id: model.service_order_id,
            stay_id: model.stay_id,
            description: model.description,
            amount: model.amount,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// 서비스 주문 요청 (룸서비스, 세탁 등)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceOrderRequest {
    #[validate(length(min = 1, max = 255, message = "주문 내용은 1~255자 이내로 입력해야 합니다"))]
    pub description: String,

    #[schema(value_type = String, example = "15000.00")]
    pub amount: Decimal,
}

/// 서비스 주문 상태 변경 요청 (관리자)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeServiceOrderStatusRequest {
    pub status: ServiceOrderStatus,
}

/// 서비스 주문 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessServiceOrderResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ServiceOrderResponse,
}

/// 서비스 주문 목록 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessServiceOrderListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<ServiceOrderResponse>,
}
