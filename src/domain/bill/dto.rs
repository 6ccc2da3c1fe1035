use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::entity::bill::{self, BillStatus};
use super::entity::payment::{self, PaymentMethod};
use super::ledger::PaymentSummary;

/// 청구서 응답 (결제 합계 포함)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub bill_id: i64,
    pub stay_id: i64,
    #[schema(value_type = String, example = "240000.00")]
    pub total_amount: Decimal,
    #[schema(value_type = String, example = "100000.00")]
    pub paid_amount: Decimal,
    #[schema(value_type = String, example = "140000.00")]
    pub outstanding_amount: Decimal,
    pub status: BillStatus,
    pub issued_at: NaiveDateTime,
    pub paid_at: Option<NaiveDateTime>,
}

impl BillResponse {
    pub fn new(model: bill::Model, summary: PaymentSummary) -> Self {
        Self {
            bill_id: model.bill_id,
            stay_id: model.stay_id,
            total_amount: model.total_amount,
            paid_amount: summary.paid,
            outstanding_amount: summary.outstanding(),
            status: model.status,
            issued_at: model.issued_at,
            paid_at: model.paid_at,
        }
    }
}

/// 결제 내역 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment_id: i64,
    pub bill_id: i64,
    #[schema(value_type = String, example = "100000.00")]
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub paid_at: NaiveDateTime,
}

impl From<payment::Model> for PaymentResponse {
    fn from(model: payment::Model) -> Self {
        Self {
            payment_id: model.payment_id,
            bill_id: model.bill_id,
            amount: model.amount,
            method: model.method,
            paid_at: model.paid_at,
        }
    }
}

/// 청구서 수동 발행 요청 (관리자)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueBillRequest {
    pub stay_id: i64,
    /// 생략 시 숙박일 수 x 체크인 날짜 요금
    #[schema(value_type = Option<String>, example = "240000.00")]
    pub total_amount: Option<Decimal>,
}

/// 결제 등록 요청
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentRequest {
    #[schema(value_type = String, example = "100000.00")]
    pub amount: Decimal,
    pub method: PaymentMethod,
}

/// 결제 등록 결과
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResultResponse {
    pub payment: PaymentResponse,
    pub bill: BillResponse,
}

/// 청구서 목록 필터
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BillQuery {
    pub status: Option<BillStatus>,
}

/// 청구서 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBillResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: BillResponse,
}

/// 청구서 목록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBillListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<BillResponse>,
}

/// 결제 등록 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPaymentResultResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: PaymentResultResponse,
}

/// 결제 내역 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPaymentListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<PaymentResponse>,
}
