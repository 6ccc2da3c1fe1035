use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::room::{self, RoomStatus, RoomType};

/// 객실 응답 (1박 요금은 오늘 기준)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub capacity: i32,
    pub description: Option<String>,
    /// 해당 날짜를 포함하는 요금 구간이 없으면 null
    #[schema(value_type = Option<String>, example = "120000.00")]
    pub price_per_night: Option<Decimal>,
}

impl RoomResponse {
    pub fn new(model: room::Model, price_per_night: Option<Decimal>) -> Self {
        Self {
            room_id: model.room_id,
            room_number: model.room_number,
            room_type: model.room_type,
            status: model.status,
            capacity: model.capacity,
            description: model.description,
            price_per_night,
        }
    }
}

/// 객실 등록 요청 (관리자)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 10, message = "객실 번호는 1~10자 이내로 입력해야 합니다"))]
    pub room_number: String,

    pub room_type: RoomType,

    #[validate(range(min = 1, max = 10, message = "수용 인원은 1~10명이어야 합니다"))]
    pub capacity: i32,

    #[validate(length(max = 255, message = "설명은 255자를 초과할 수 없습니다"))]
    pub description: Option<String>,

    /// 생략 시 AVAILABLE
    pub status: Option<RoomStatus>,
}

/// 객실 수정 요청 (관리자). 전달된 필드만 변경됩니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 10, message = "객실 번호는 1~10자 이내로 입력해야 합니다"))]
    pub room_number: Option<String>,

    pub room_type: Option<RoomType>,

    #[validate(range(min = 1, max = 10, message = "수용 인원은 1~10명이어야 합니다"))]
    pub capacity: Option<i32>,

    #[validate(length(max = 255, message = "설명은 255자를 초과할 수 없습니다"))]
    pub description: Option<String>,
}

/// 객실 상태 변경 요청 (AVAILABLE <-> MAINTENANCE)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoomStatusRequest {
    pub status: RoomStatus,
}

/// 객실 목록 필터
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct RoomQuery {
    pub status: Option<RoomStatus>,
    pub room_type: Option<RoomType>,
}

/// 예약 가능 객실 검색 조건
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// 투숙 인원 (수용 인원 이상 객실만)
    pub guests: Option<i32>,
}

/// 객실 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRoomResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: RoomResponse,
}

/// 객실 목록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRoomListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<RoomResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_zero_capacity() {
        let req = CreateRoomRequest {
            room_number: "101".to_string(),
            room_type: RoomType::Single,
            capacity: 0,
            description: None,
            status: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn should_accept_partial_update() {
        let req = UpdateRoomRequest {
            room_number: None,
            room_type: None,
            capacity: Some(3),
            description: None,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn should_deserialize_room_enums_in_upper_case() {
        let req: CreateRoomRequest = serde_json::from_str(
            r#"{"roomNumber":"201","roomType":"SUITE","capacity":4,"status":"MAINTENANCE"}"#,
        )
        .unwrap();

        assert_eq!(req.room_type, RoomType::Suite);
        assert_eq!(req.status, Some(RoomStatus::Maintenance));
    }
}
