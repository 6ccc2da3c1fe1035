use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::equipment;

/// 비품 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentResponse {
    pub equipment_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// 미배정 비품이면 null
    pub room_id: Option<i64>,
    pub updated_at: NaiveDateTime,
}

impl From<equipment::Model> for EquipmentResponse {
    fn from(model: equipment::Model) -> Self {
        Self {
            equipment_id: model.equipment_id,
            name: model.name,
            description: model.description,
            room_id: model.room_id,
            updated_at: model.updated_at,
        }
    }
}

/// 비품 등록 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentRequest {
    #[validate(length(min = 1, max = 100, message = "비품 이름은 1~100자 이내로 입력해야 합니다"))]
    pub name: String,

    #[validate(length(max = 255, message = "설명은 255자를 초과할 수 없습니다"))]
    pub description: Option<String>,

    /// 등록과 동시에 배치할 객실
    pub room_id: Option<i64>,
}

/// 비품 수정 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipmentRequest {
    #[validate(length(min = 1, max = 100, message = "비품 이름은 1~100자 이내로 입력해야 합니다"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "설명은 255자를 초과할 수 없습니다"))]
    pub description: Option<String>,
}

/// 비품 객실 배치 요청
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignEquipmentRequest {
    pub room_id: i64,
}

/// 비품 목록 필터
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct EquipmentQuery {
    pub room_id: Option<i64>,
    /// true면 어느 객실에도 배치되지 않은 비품만
    #[serde(default)]
    pub unlinked: bool,
}

/// 비품 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEquipmentResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: EquipmentResponse,
}

/// 비품 목록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEquipmentListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<EquipmentResponse>,
}
