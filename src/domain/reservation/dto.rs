use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::reservation::{self, ReservationStatus};
use super::entity::stay;
use crate::domain::bill::dto::BillResponse;

/// 예약 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guest_count: i32,
    pub status: ReservationStatus,
    pub created_at: NaiveDateTime,
}

impl From<reservation::Model> for ReservationResponse {
    fn from(model: reservation::Model) -> Self {
        Self {
            reservation_id: model.reservation_id,
            room_id: model.room_id,
            user_id: model.user_id,
            check_in: model.check_in,
            check_out: model.check_out,
            nights: (model.check_out - model.check_in).num_days(),
            guest_count: model.guest_count,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// 투숙 기록 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StayResponse {
    pub stay_id: i64,
    pub reservation_id: i64,
    pub room_id: i64,
    pub checked_in_at: NaiveDateTime,
    /// 투숙 중이면 null
    pub checked_out_at: Option<NaiveDateTime>,
}

impl From<stay::Model> for StayResponse {
    fn from(model: stay::Model) -> Self {
        Self {
            stay_id: model.stay_id,
            reservation_id: model.reservation_id,
            room_id: model.room_id,
            checked_in_at: model.checked_in_at,
            checked_out_at: model.checked_out_at,
        }
    }
}

/// 예약 상태 변경 결과 (체크인/체크아웃/취소)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStatusResponse {
    pub reservation: ReservationResponse,
    pub stay: Option<StayResponse>,
    /// 체크아웃 시 발행된 청구서
    pub bill: Option<BillResponse>,
}

/// 예약 생성 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    #[validate(range(min = 1, max = 10, message = "투숙 인원은 1~10명이어야 합니다"))]
    pub guest_count: i32,
}

/// 예약 기간 변경 요청 (CONFIRMED 상태에서만)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    /// 생략 시 기존 인원 유지
    #[validate(range(min = 1, max = 10, message = "투숙 인원은 1~10명이어야 합니다"))]
    pub guest_count: Option<i32>,
}

/// 체크아웃 요청. 금액을 생략하면 요금 이력으로 계산합니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    #[schema(value_type = Option<String>, example = "240000.00")]
    pub total_amount: Option<Decimal>,
}

/// 예약 상태 변경 요청
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReservationStatusRequest {
    pub status: ReservationStatus,
    /// CHECKED_OUT 전환 시 청구 금액 (선택)
    #[schema(value_type = Option<String>)]
    pub total_amount: Option<Decimal>,
}

/// 예약 목록 필터
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReservationQuery {
    pub status: Option<ReservationStatus>,
}

/// 예약 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessReservationResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ReservationResponse,
}

/// 예약 목록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessReservationListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<ReservationResponse>,
}

/// 예약 상태 변경 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessReservationStatusResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ReservationStatusResponse,
}

/// 투숙 기록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessStayResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: StayResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_zero_guests() {
        let req: CreateReservationRequest = serde_json::from_str(
            r#"{"roomId":1,"checkIn":"2026-05-01","checkOut":"2026-05-03","guestCount":0}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn should_parse_status_change_without_amount() {
        let req: ChangeReservationStatusRequest =
            serde_json::from_str(r#"{"status":"CHECKED_OUT"}"#).unwrap();

        assert_eq!(req.status, ReservationStatus::CheckedOut);
        assert!(req.total_amount.is_none());
    }
}
